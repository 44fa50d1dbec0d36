use crate::app::actions::AppActions;
use crate::app::state::{Alert, App, AppScreen, FormField};
use crate::export::{ExportError, ExportFormat};
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, actions: &AppActions, key: KeyCode) {
    if handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Form => handle_form_input(app, key),
        AppScreen::Results => handle_results_input(app, actions, key),
        AppScreen::PrintView => handle_print_view_input(app, key),
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    // Never swallow keys while the paragraph field is capturing text.
    if app.screen == AppScreen::Form && app.form.editing {
        return false;
    }

    if key == KeyCode::F(1) || key == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

fn handle_form_input(app: &mut App, key: KeyCode) {
    if app.form.editing {
        match key {
            KeyCode::Char(c) => app.form.paragraph.push(c),
            KeyCode::Backspace => {
                app.form.paragraph.pop();
            }
            KeyCode::Enter => app.form.paragraph.push('\n'),
            KeyCode::Esc => app.form.editing = false,
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('g') => app.request_submit(),
        KeyCode::Char('c') => app.clear_form(),
        KeyCode::Char('r') => {
            if app.results.is_some() {
                app.screen = AppScreen::Results;
            } else {
                app.alert = Some(Alert::warning("No results yet"));
            }
        }
        KeyCode::Up | KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Down | KeyCode::Tab => app.form.next_field(),
        KeyCode::Enter => match app.form.field {
            FormField::Paragraph => app.form.editing = true,
            FormField::NumQuestions | FormField::Difficulty => app.request_submit(),
        },
        KeyCode::Left => match app.form.field {
            FormField::NumQuestions => app.form.fewer_questions(),
            FormField::Difficulty => app.form.prev_difficulty(),
            FormField::Paragraph => {}
        },
        KeyCode::Right => match app.form.field {
            FormField::NumQuestions => app.form.more_questions(),
            FormField::Difficulty => app.form.next_difficulty(),
            FormField::Paragraph => {}
        },
        _ => {}
    }
}

fn handle_results_input(app: &mut App, actions: &AppActions, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Char('b') => app.screen = AppScreen::Form,
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('n') => app.clear_form(),
        KeyCode::Up => app.results_scroll = app.results_scroll.saturating_sub(1),
        KeyCode::Down => app.results_scroll = app.results_scroll.saturating_add(1),
        KeyCode::PageUp => app.results_scroll = app.results_scroll.saturating_sub(10),
        KeyCode::PageDown => app.results_scroll = app.results_scroll.saturating_add(10),
        KeyCode::Home => app.results_scroll = 0,
        KeyCode::Char('j') => export_action(app, actions, ExportFormat::Json),
        KeyCode::Char('t') => export_action(app, actions, ExportFormat::Text),
        KeyCode::Char('p') => open_print_view(app),
        _ => {}
    }
}

fn handle_print_view_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Char('b') => app.screen = AppScreen::Results,
        KeyCode::Char('q') => app.running = false,
        KeyCode::Up => app.print_scroll = app.print_scroll.saturating_sub(1),
        KeyCode::Down => app.print_scroll = app.print_scroll.saturating_add(1),
        KeyCode::PageUp => app.print_scroll = app.print_scroll.saturating_sub(10),
        KeyCode::PageDown => app.print_scroll = app.print_scroll.saturating_add(10),
        KeyCode::Home => app.print_scroll = 0,
        _ => {}
    }
}

fn export_action(app: &mut App, actions: &AppActions, format: ExportFormat) {
    match actions.export(app.exportable(), format) {
        Ok(path) => {
            app.alert = Some(Alert::info(format!("Export written: {}", path.display())));
        }
        Err(error @ ExportError::NoData) => {
            app.alert = Some(Alert::warning(error.to_string()));
        }
        Err(error) => {
            app.alert = Some(Alert::danger(error.to_string()));
        }
    }
}

fn open_print_view(app: &mut App) {
    if app.exportable().is_some() {
        app.print_scroll = 0;
        app.screen = AppScreen::PrintView;
    } else {
        app.alert = Some(Alert::warning("No generated questions to print"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, GenerateRequest, QaBackend};
    use crate::app::state::{AlertLevel, UiState};
    use crate::domain::QaPair;
    use crate::export::DirSink;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NeverBackend;

    #[async_trait]
    impl QaBackend for NeverBackend {
        async fn generate(&self, _request: GenerateRequest) -> Result<Vec<QaPair>, ApiError> {
            unreachable!("input tests never reach the network");
        }
    }

    fn test_actions() -> AppActions {
        AppActions::with_backend(Arc::new(NeverBackend), DirSink::new(std::env::temp_dir()))
    }

    #[test]
    fn export_with_no_data_raises_notice_and_keeps_ui_state() {
        let actions = test_actions();
        let mut app = App::new();
        app.screen = AppScreen::Results;
        app.ui_state = UiState::Idle;

        handle_input(&mut app, &actions, KeyCode::Char('j'));

        assert_eq!(app.ui_state, UiState::Idle);
        assert_eq!(
            app.alert.as_ref().map(|a| a.level),
            Some(AlertLevel::Warning)
        );
    }

    #[test]
    fn print_with_no_data_raises_notice() {
        let actions = test_actions();
        let mut app = App::new();
        app.screen = AppScreen::Results;

        handle_input(&mut app, &actions, KeyCode::Char('p'));

        assert_eq!(app.screen, AppScreen::Results);
        assert!(app.alert.is_some());
    }

    #[test]
    fn paragraph_editing_captures_characters() {
        let actions = test_actions();
        let mut app = App::new();

        handle_input(&mut app, &actions, KeyCode::Enter); // start editing
        assert!(app.form.editing);

        handle_input(&mut app, &actions, KeyCode::Char('త'));
        handle_input(&mut app, &actions, KeyCode::Char('q')); // a char, not quit
        assert!(app.running);
        assert_eq!(app.form.paragraph.chars().count(), 2);

        handle_input(&mut app, &actions, KeyCode::Esc);
        assert!(!app.form.editing);
    }

    #[test]
    fn difficulty_cycles_with_arrows() {
        let actions = test_actions();
        let mut app = App::new();
        app.form.field = crate::app::state::FormField::Difficulty;

        let start = app.form.difficulty_index;
        handle_input(&mut app, &actions, KeyCode::Right);
        assert_ne!(app.form.difficulty_index, start);
        handle_input(&mut app, &actions, KeyCode::Left);
        assert_eq!(app.form.difficulty_index, start);
    }
}
