// UI module for telugu-qa-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Form => screens::form::render_form(app, f),
        AppScreen::Results => screens::results::render_results(app, f),
        AppScreen::PrintView => screens::print_view::render_print_view(app, f),
    }

    if app.show_help {
        widgets::popup::render_help_popup(f);
    }

    widgets::alert::render_alert(app, f);
}
