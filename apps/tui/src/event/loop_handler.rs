use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::convert::TryFrom;
use std::fmt;
use std::io::{Read as _, Stdout};

use crate::api::GenerateRequest;
use crate::app::state::{Alert, AppScreen, UiState};
use crate::app::{handle_input, App, AppActions};
use crate::cli::CliArgs;
use crate::domain::{Difficulty, ResultSet};
use crate::export::{self, ExportFormat};
use crate::ui;
use crate::validate::validate;

// Define states for the one outbound generation request
#[derive(Clone, Copy, PartialEq, Debug)]
enum RequestState {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::InFlight => write!(f, "InFlight"),
            Self::Succeeded => write!(f, "Succeeded"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

// Define events for the request lifecycle
#[derive(Clone, Debug)]
enum RequestEvent {
    Submitted,
    Succeeded(ResultSet),
    Failed(String),
    Reset,
}

impl fmt::Display for RequestEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted => write!(f, "Submitted"),
            Self::Succeeded(results) => write!(f, "Succeeded({} pairs)", results.len()),
            Self::Failed(message) => write!(f, "Failed({message})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

// Define a custom error type for state transitions
#[derive(Debug)]
struct StateTransitionError {
    from: RequestState,
    event: RequestEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

/// State machine guarding the single-slot request lifecycle. UI state and
/// the held result set are only ever touched through its transitions.
struct RequestMachine {
    state: RequestState,
}

impl RequestMachine {
    const fn new() -> Self {
        Self {
            state: RequestState::Idle,
        }
    }

    fn process_event(
        &mut self,
        event: &RequestEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

// Helper struct for state transitions
struct NextState(RequestState);

impl NextState {
    const fn new(state: RequestState) -> Self {
        Self(state)
    }
}

impl RequestState {
    const fn next_state(self) -> NextState {
        NextState::new(self)
    }
}

impl TryFrom<(RequestState, &RequestEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (RequestState, &RequestEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (RequestState::Idle, RequestEvent::Submitted) => {
                // Results region becomes visible with the throbber in it;
                // it stays visible until the request settles.
                app.ui_state = UiState::Loading;
                app.screen = AppScreen::Results;
                Ok(RequestState::InFlight.next_state())
            }
            (RequestState::InFlight, RequestEvent::Succeeded(results)) => {
                app.ui_state = if results.is_empty() {
                    UiState::ShownEmpty
                } else {
                    UiState::Shown
                };
                app.results = Some(results.clone());
                app.results_scroll = 0;
                Ok(RequestState::Succeeded.next_state())
            }
            (RequestState::InFlight, RequestEvent::Failed(message)) => {
                app.ui_state = UiState::Error(message.clone());
                app.alert = Some(Alert::danger(message.clone()));
                // Hide the results region on any non-success outcome.
                app.screen = AppScreen::Form;
                Ok(RequestState::Failed.next_state())
            }
            (RequestState::Succeeded | RequestState::Failed, RequestEvent::Reset) => {
                Ok(RequestState::Idle.next_state())
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Move a queued submission into flight and settle a completed request.
/// Called once per loop iteration, between input handling and the next draw.
fn pump_request_lifecycle(machine: &mut RequestMachine, app: &mut App, actions: &mut AppActions) {
    if let Some(request) = app.pending_submit.take() {
        if machine
            .process_event(&RequestEvent::Submitted, app)
            .is_ok()
            && !actions.start_request(request)
        {
            // The actions guard and the machine disagree; treat it as a
            // failed request so the UI leaves the loading state.
            let failed = RequestEvent::Failed("A request is already in progress".to_string());
            if machine.process_event(&failed, app).is_err() {
                // Non-fatal state transition error
            }
            if machine.process_event(&RequestEvent::Reset, app).is_err() {
                // Non-fatal reset error
            }
        }
    }

    if let Some(outcome) = actions.poll_outcome() {
        let settled = match outcome {
            Ok(results) => RequestEvent::Succeeded(results),
            Err(error) => RequestEvent::Failed(error.user_message()),
        };

        if machine.process_event(&settled, app).is_err() {
            // Non-fatal state transition error
        }
        if machine.process_event(&RequestEvent::Reset, app).is_err() {
            // Non-fatal reset error
        }
    }
}

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    actions: &mut AppActions,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut machine = RequestMachine::new();

    loop {
        // Update animations and expire alerts
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, actions, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }

        pump_request_lifecycle(&mut machine, app, actions);
    }
    Ok(())
}

/// Run a single generation without the UI: read the paragraph, submit it,
/// print the results (or the JSON export document), optionally write an
/// export file.
pub async fn run_headless(actions: &AppActions, cli: &CliArgs) -> Result<()> {
    let paragraph = read_paragraph(cli)?;
    validate(&paragraph).map_err(|error| color_eyre::eyre::eyre!("{error}"))?;

    let difficulty = Difficulty::parse(&cli.difficulty)
        .ok_or_else(|| color_eyre::eyre::eyre!("Unknown difficulty: {}", cli.difficulty))?;

    let request = GenerateRequest::new(paragraph, cli.num_questions, difficulty);
    let results = actions
        .generate_once(request)
        .await
        .map_err(|error| color_eyre::eyre::eyre!("{}", error.user_message()))?;

    if cli.json {
        let document = export::json_document(&results, chrono::Utc::now())?;
        println!("{}", String::from_utf8_lossy(&document));
    } else {
        render_headless_report(&results);
    }

    if let Some(format) = &cli.export {
        let format = ExportFormat::parse(format)?;
        let exportable = Some(&results).filter(|r| !r.is_empty());
        let path = actions.export(exportable, format)?;
        eprintln!("Export written: {}", path.display());
    }

    Ok(())
}

fn read_paragraph(cli: &CliArgs) -> Result<String> {
    match &cli.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn render_headless_report(results: &ResultSet) {
    if results.is_empty() {
        println!("No questions were generated. Try another paragraph.");
        return;
    }

    println!("\nTelugu Q&A Results");
    println!("==================");
    println!("Total questions: {}", results.len());

    for (index, pair) in results.pairs.iter().enumerate() {
        println!("\n{}. {}", index + 1, pair.question);
        println!("   Answer: {}", pair.answer);
        println!("   Type: {}", pair.kind);
    }
}
