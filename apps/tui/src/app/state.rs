use crate::api::GenerateRequest;
use crate::domain::{Difficulty, ResultSet};
use crate::validate::validate;
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

const ALERT_TTL: Duration = Duration::from_secs(5);
const MAX_QUESTIONS: u8 = 20;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Form,
    Results,
    PrintView,
}

/// The whole of the result-region lifecycle. `Shown`/`ShownEmpty` make the
/// results region visible; `Loading` shows the throbber; `Error` hides the
/// region again.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum UiState {
    Idle,
    Loading,
    Shown,
    ShownEmpty,
    Error(String),
}

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Paragraph,
    NumQuestions,
    Difficulty,
}

/// The generation form: paragraph text plus the two request parameters.
#[derive(Debug, Clone)]
pub struct FormState {
    pub field: FormField,
    pub paragraph: String,
    pub num_questions: u8,
    pub difficulty_index: usize,
    /// Whether the paragraph field is actively capturing text.
    pub editing: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            field: FormField::Paragraph,
            paragraph: String::new(),
            num_questions: 5,
            difficulty_index: 3, // mixed
            editing: false,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_index(self.difficulty_index).unwrap_or_default()
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Paragraph => FormField::NumQuestions,
            FormField::NumQuestions => FormField::Difficulty,
            FormField::Difficulty => FormField::Paragraph,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            FormField::Paragraph => FormField::Difficulty,
            FormField::NumQuestions => FormField::Paragraph,
            FormField::Difficulty => FormField::NumQuestions,
        };
    }

    pub fn next_difficulty(&mut self) {
        self.difficulty_index = (self.difficulty_index + 1) % Difficulty::options().len();
    }

    pub fn prev_difficulty(&mut self) {
        let len = Difficulty::options().len();
        self.difficulty_index = (self.difficulty_index + len - 1) % len;
    }

    pub fn more_questions(&mut self) {
        if self.num_questions < MAX_QUESTIONS {
            self.num_questions += 1;
        }
    }

    pub fn fewer_questions(&mut self) {
        if self.num_questions > 1 {
            self.num_questions -= 1;
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Danger,
}

/// A dismissible, auto-expiring user notice.
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub level: AlertLevel,
    raised_at: Instant,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, AlertLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, AlertLevel::Warning)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, AlertLevel::Danger)
    }

    fn new(message: impl Into<String>, level: AlertLevel) -> Self {
        Self {
            message: message.into(),
            level,
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= ALERT_TTL
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub ui_state: UiState,
    pub form: FormState,
    /// Most recent successful response. Survives later failed submissions.
    pub results: Option<ResultSet>,
    pub alert: Option<Alert>,
    /// Single-slot handoff to the event loop; set by the form, consumed once
    /// the request lifecycle machine accepts it.
    pub pending_submit: Option<GenerateRequest>,
    pub results_scroll: u16,
    pub print_scroll: u16,
    pub show_help: bool,
    pub throbber_state: ThrobberState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Form,
            ui_state: UiState::Idle,
            form: FormState::new(),
            results: None,
            alert: None,
            pending_submit: None,
            results_scroll: 0,
            print_scroll: 0,
            show_help: false,
            throbber_state: ThrobberState::default(),
        }
    }

    /// Per-frame housekeeping: advance the throbber while loading, drop
    /// expired alerts.
    pub fn update(&mut self) {
        let now = Instant::now();

        if self.is_loading() {
            self.throbber_state.calc_next();
        }

        if self
            .alert
            .as_ref()
            .is_some_and(|alert| alert.is_expired(now))
        {
            self.alert = None;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.ui_state == UiState::Loading
    }

    /// Validate the form and queue a submission. While a request is in
    /// flight the trigger is a guarded no-op (a notice, not a second
    /// request).
    pub fn request_submit(&mut self) {
        if self.is_loading() || self.pending_submit.is_some() {
            self.alert = Some(Alert::warning("A request is already in progress"));
            return;
        }

        match validate(&self.form.paragraph) {
            Ok(()) => {
                self.pending_submit = Some(GenerateRequest::new(
                    self.form.paragraph.clone(),
                    self.form.num_questions,
                    self.form.difficulty(),
                ));
            }
            Err(error) => {
                self.alert = Some(Alert::warning(error.to_string()));
            }
        }
    }

    /// The result set export and print operate on: the last successful
    /// response, and only when it actually holds pairs.
    pub fn exportable(&self) -> Option<&ResultSet> {
        self.results.as_ref().filter(|results| !results.is_empty())
    }

    /// Reset the paragraph and hide the results region. The held result set
    /// is kept.
    pub fn clear_form(&mut self) {
        self.form.paragraph.clear();
        self.form.editing = false;
        self.form.field = FormField::Paragraph;
        self.ui_state = UiState::Idle;
        self.screen = AppScreen::Form;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QaPair;

    fn telugu_form(app: &mut App) {
        app.form.paragraph = "తెలుగు పేరాగ్రాఫ్".to_string();
    }

    #[test]
    fn submit_with_empty_paragraph_raises_warning_and_queues_nothing() {
        let mut app = App::new();
        app.request_submit();
        assert!(app.pending_submit.is_none());
        assert_eq!(
            app.alert.as_ref().map(|a| a.level),
            Some(AlertLevel::Warning)
        );
    }

    #[test]
    fn submit_with_non_telugu_paragraph_is_blocked() {
        let mut app = App::new();
        app.form.paragraph = "english only".to_string();
        app.request_submit();
        assert!(app.pending_submit.is_none());
        assert!(app.alert.is_some());
    }

    #[test]
    fn submit_queues_request_with_form_parameters() {
        let mut app = App::new();
        telugu_form(&mut app);
        app.form.num_questions = 7;
        app.form.difficulty_index = 0;
        app.request_submit();

        let request = app.pending_submit.expect("request queued");
        assert_eq!(request.num_questions, "7");
        assert_eq!(request.difficulty, "easy");
    }

    #[test]
    fn submit_while_loading_is_a_guarded_noop() {
        let mut app = App::new();
        telugu_form(&mut app);
        app.ui_state = UiState::Loading;
        app.request_submit();
        assert!(app.pending_submit.is_none());
        assert!(app.alert.is_some());
    }

    #[test]
    fn exportable_requires_non_empty_pairs() {
        let mut app = App::new();
        assert!(app.exportable().is_none());

        app.results = Some(ResultSet::new("పేరా", Vec::new()));
        assert!(app.exportable().is_none());

        app.results = Some(ResultSet::new(
            "పేరా",
            vec![QaPair {
                question: "q".into(),
                answer: "a".into(),
                kind: "what".into(),
            }],
        ));
        assert!(app.exportable().is_some());
    }

    #[test]
    fn clear_form_keeps_held_results() {
        let mut app = App::new();
        telugu_form(&mut app);
        app.results = Some(ResultSet::new("పేరా", Vec::new()));
        app.ui_state = UiState::Shown;
        app.screen = AppScreen::Results;

        app.clear_form();

        assert!(app.form.paragraph.is_empty());
        assert_eq!(app.ui_state, UiState::Idle);
        assert_eq!(app.screen, AppScreen::Form);
        assert!(app.results.is_some());
    }

    #[test]
    fn form_field_cycle_is_closed() {
        let mut form = FormState::new();
        form.next_field();
        form.next_field();
        form.next_field();
        assert_eq!(form.field, FormField::Paragraph);
        form.prev_field();
        assert_eq!(form.field, FormField::Difficulty);
    }

    #[test]
    fn question_count_is_clamped() {
        let mut form = FormState::new();
        form.num_questions = 1;
        form.fewer_questions();
        assert_eq!(form.num_questions, 1);

        form.num_questions = MAX_QUESTIONS;
        form.more_questions();
        assert_eq!(form.num_questions, MAX_QUESTIONS);
    }
}
