// App module for telugu-qa-tui
// Handles application state, input handling and I/O actions

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{AppActions, RequestOutcome};
pub use input::handle_input;
pub use state::{App, AppScreen, UiState};
