use crate::api::{GenerateRequest, HttpQaClient, QaBackend};
use crate::config::AppConfig;
use crate::domain::ResultSet;
use crate::export::{self, ArtifactSink, DirSink, ExportError, ExportFormat};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub type RequestOutcome = Result<ResultSet, crate::api::ApiError>;

/// Owns the I/O handles: the generation backend and the export sink.
/// The one in-flight request is tracked here so overlapping submissions
/// cannot race.
pub struct AppActions {
    backend: Arc<dyn QaBackend>,
    sink: DirSink,
    outcome_tx: UnboundedSender<RequestOutcome>,
    outcome_rx: UnboundedReceiver<RequestOutcome>,
    in_flight: bool,
}

impl AppActions {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_backend(
            Arc::new(HttpQaClient::new(config.endpoint.clone())),
            DirSink::new(&config.export_dir),
        )
    }

    pub fn with_backend(backend: Arc<dyn QaBackend>, sink: DirSink) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            sink,
            outcome_tx,
            outcome_rx,
            in_flight: false,
        }
    }

    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Spawn the generation request on a background task. Returns false
    /// while another request is still in flight (single-slot guard).
    pub fn start_request(&mut self, request: GenerateRequest) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;

        let backend = Arc::clone(&self.backend);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let paragraph = request.paragraph.clone();
            let outcome = backend
                .generate(request)
                .await
                .map(|pairs| ResultSet::new(paragraph, pairs));
            // The receiver only goes away on shutdown.
            let _ = tx.send(outcome);
        });

        true
    }

    /// Non-blocking poll for a settled request.
    pub fn poll_outcome(&mut self) -> Option<RequestOutcome> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = false;
                Some(outcome)
            }
            Err(_) => None,
        }
    }

    /// One-shot request for headless mode.
    pub async fn generate_once(&self, request: GenerateRequest) -> RequestOutcome {
        let paragraph = request.paragraph.clone();
        self.backend
            .generate(request)
            .await
            .map(|pairs| ResultSet::new(paragraph, pairs))
    }

    /// Build and write an export file for the held result set.
    pub fn export(
        &self,
        results: Option<&ResultSet>,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        let results = results.ok_or(ExportError::NoData)?;
        let artifact = export::build_artifact(results, format, chrono::Utc::now())?;
        self.sink.save(&artifact)
    }
}
