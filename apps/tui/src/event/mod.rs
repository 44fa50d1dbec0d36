// Event module for telugu-qa-tui
// Main loop, request lifecycle and headless mode

pub mod loop_handler;

pub use loop_handler::{run, run_headless};
