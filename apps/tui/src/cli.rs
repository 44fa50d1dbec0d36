use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "telugu-qa-tui", version, about = "Telugu Q&A generator client")]
pub struct CliArgs {
    /// Generate once and exit without the TUI
    #[arg(long)]
    pub headless: bool,

    /// Print headless results as the JSON export document
    #[arg(long)]
    pub json: bool,

    /// Read the paragraph from a file instead of stdin (headless mode)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Number of questions to request
    #[arg(long = "num-questions", value_name = "N", default_value_t = 5)]
    pub num_questions: u8,

    /// Difficulty filter: easy, medium, hard or mixed
    #[arg(long, value_name = "LEVEL", default_value = "mixed")]
    pub difficulty: String,

    /// Also write an export file in headless mode: json or text
    #[arg(long, value_name = "FORMAT")]
    pub export: Option<String>,

    /// Override the generation endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the export output directory
    #[arg(long = "export-dir", value_name = "PATH")]
    pub export_dir: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.endpoint {
            std::env::set_var("QA_ENDPOINT", url);
        }
        if let Some(dir) = &self.export_dir {
            std::env::set_var("EXPORT_DIR", dir);
        }
    }
}
