use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Default generation endpoint (the Flask service's local address).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/generate-qa";

const DEFAULT_EXPORT_DIR: &str = "./exports";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub export_dir: PathBuf,
}

/// Initializes the application configuration from `.env` and the
/// environment.
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig {
        endpoint: get_endpoint(),
        export_dir: get_export_dir(),
    }
}

/// Gets the generation service endpoint
pub fn get_endpoint() -> String {
    env::var("QA_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}

/// Gets the directory path for written exports
pub fn get_export_dir() -> PathBuf {
    env::var("EXPORT_DIR").map_or_else(|_| PathBuf::from(DEFAULT_EXPORT_DIR), PathBuf::from)
}
