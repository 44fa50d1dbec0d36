use super::{ApiError, GenerateRequest, QaBackend};
use crate::domain::QaPair;
use async_trait::async_trait;

/// reqwest-backed implementation of `QaBackend` against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpQaClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpQaClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl QaBackend for HttpQaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<Vec<QaPair>, ApiError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .json::<super::GenerateResponse>()
            .await?;

        response.into_pairs()
    }
}
