mod api;
mod app;
mod cli;
mod config;
mod domain;
mod event;
mod export;
mod terminal;
mod ui;
mod validate;

use app::{App, AppActions};
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let cli = CliArgs::parse();
    cli.apply_env_overrides();

    let config = config::init_app_config();

    // One-shot mode: explicit flag, or stdout is not a terminal
    if cli.headless || !is_terminal() {
        let actions = AppActions::new(&config);
        return event::run_headless(&actions, &cli).await;
    }

    let mut app = App::new();
    let mut actions = AppActions::new(&config);

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, &mut actions).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
