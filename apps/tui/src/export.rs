//! Serializes the last held result set into downloadable formats and the
//! printable report. Artifact production (bytes + filename) is kept separate
//! from writing so the serializers stay testable without touching the
//! filesystem.

use crate::domain::{QaPair, ResultSet};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed filename prefix: `telugu-qa-<epoch-millis>.<ext>`.
pub const FILE_PREFIX: &str = "telugu-qa";

/// Report header, kept byte-compatible with the web version's exports.
const REPORT_HEADER: &str = "తెలుగు ప్రశ్నోత్తరాలు";
const ANSWER_LABEL: &str = "ఉత్తరం";
const KIND_LABEL: &str = "రకం";
const PARAGRAPH_LABEL: &str = "అసలు పేరాగ్రాఫ్";
const QUESTIONS_LABEL: &str = "రూపొందించిన ప్రశ్నలు";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No generated questions to export")]
    NoData,
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Result<Self, ExportError> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

/// A produced export: bytes plus the name they should be written under.
/// Writing (or printing) is delegated to an `ArtifactSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub trait ArtifactSink {
    fn save(&self, artifact: &Artifact) -> Result<PathBuf, ExportError>;
}

/// Default sink: writes artifacts into a directory, creating it on demand.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ArtifactSink for DirSink {
    fn save(&self, artifact: &Artifact) -> Result<PathBuf, ExportError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let path = self.dir.join(&artifact.filename);
        fs::write(&path, &artifact.bytes)?;
        Ok(path)
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    original_paragraph: &'a str,
    qa_pairs: &'a [QaPair],
    generated_at: String,
    total_questions: usize,
}

/// Pretty-printed JSON export document.
pub fn json_document(results: &ResultSet, now: DateTime<Utc>) -> Result<Vec<u8>, ExportError> {
    let document = JsonDocument {
        original_paragraph: &results.original_paragraph,
        qa_pairs: &results.pairs,
        generated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        total_questions: results.len(),
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}

/// Plain-text report: fixed header, the original paragraph, then one
/// numbered block per pair.
pub fn text_report(results: &ResultSet) -> String {
    let mut text = format!("{REPORT_HEADER}\n==================\n\n");
    let _ = write!(
        text,
        "{PARAGRAPH_LABEL}:\n{}\n\n{QUESTIONS_LABEL}:\n\n",
        results.original_paragraph
    );

    for (index, pair) in results.pairs.iter().enumerate() {
        let _ = write!(
            text,
            "{}. {}\n   {ANSWER_LABEL}: {}\n   {KIND_LABEL}: {}\n\n",
            index + 1,
            pair.question,
            pair.answer,
            pair.kind
        );
    }

    text
}

/// The printable view: same content as the text report, laid out for a
/// full-screen read.
pub fn print_report(results: &ResultSet) -> String {
    let mut text = format!(
        "{REPORT_HEADER}\n\n{PARAGRAPH_LABEL}: {}\n",
        results.original_paragraph
    );
    text.push_str("--------------------------------\n\n");

    for (index, pair) in results.pairs.iter().enumerate() {
        let _ = write!(
            text,
            "{}. {}\n   {}\n   {KIND_LABEL}: {}\n\n",
            index + 1,
            pair.question,
            pair.answer,
            pair.kind
        );
    }

    text
}

/// Build the export artifact for a held result set.
pub fn build_artifact(
    results: &ResultSet,
    format: ExportFormat,
    now: DateTime<Utc>,
) -> Result<Artifact, ExportError> {
    let bytes = match format {
        ExportFormat::Json => json_document(results, now)?,
        ExportFormat::Text => text_report(results).into_bytes(),
    };

    Ok(Artifact {
        filename: format!(
            "{FILE_PREFIX}-{}.{}",
            now.timestamp_millis(),
            format.extension()
        ),
        bytes,
    })
}

/// Entry point for a format chosen by name. Fails `NoData` before looking at
/// the format, matching the original UI's behavior; a result set with zero
/// pairs counts as no data.
pub fn export(
    results: Option<&ResultSet>,
    format: &str,
    now: DateTime<Utc>,
) -> Result<Artifact, ExportError> {
    let results = results
        .filter(|r| !r.is_empty())
        .ok_or(ExportError::NoData)?;
    let format = ExportFormat::parse(format)?;
    build_artifact(results, format, now)
}
