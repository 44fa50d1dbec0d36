//! Client for the Telugu Q&A generation service.
//!
//! The `QaBackend` trait is the seam between the UI and the network: the
//! application only ever talks to the trait, so the controller can be tested
//! against a stub without a running service.

pub mod client;
pub mod models;

pub use client::HttpQaClient;
pub use models::{GenerateRequest, GenerateResponse};

use crate::domain::QaPair;
use async_trait::async_trait;
use thiserror::Error;

/// Shown when the service fails without a usable message, and on any
/// transport-level failure.
pub const GENERIC_FAILURE: &str = "Server error. Please try again";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered, but reported `success: false`.
    #[error("{0}")]
    Service(String),
    /// Network unreachable, non-JSON body, or any other transport fault.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The message surfaced to the user. Service-reported messages are shown
    /// verbatim; transport details are collapsed into a generic notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Service(message) => message.clone(),
            Self::Transport(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

#[async_trait]
pub trait QaBackend: Send + Sync {
    /// Submit a paragraph and parameters; returns the generated pairs in
    /// service order. An empty vec is a valid outcome.
    async fn generate(&self, request: GenerateRequest) -> Result<Vec<QaPair>, ApiError>;
}
