use super::{ApiError, GENERIC_FAILURE};
use crate::domain::{Difficulty, QaPair};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate-qa`. The service expects `num_questions` and
/// `difficulty` as strings.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub paragraph: String,
    pub num_questions: String,
    pub difficulty: String,
}

impl GenerateRequest {
    pub fn new(paragraph: impl Into<String>, num_questions: u8, difficulty: Difficulty) -> Self {
        Self {
            paragraph: paragraph.into(),
            num_questions: num_questions.to_string(),
            difficulty: difficulty.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Absent on the service's HTTP 400/500 error bodies, which carry only
    /// `{"error": "..."}`. Missing means failure.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub qa_pairs: Option<Vec<QaPair>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Collapse the service envelope into pairs or a service error.
    pub fn into_pairs(self) -> Result<Vec<QaPair>, ApiError> {
        if self.success {
            Ok(self.qa_pairs.unwrap_or_default())
        } else {
            Err(ApiError::Service(
                self.error
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_parameters_as_strings() {
        let request = GenerateRequest::new("తెలుగు", 5, Difficulty::Mixed);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["paragraph"], "తెలుగు");
        assert_eq!(value["num_questions"], "5");
        assert_eq!(value["difficulty"], "mixed");
    }

    #[test]
    fn success_response_yields_pairs_in_order() {
        let body = r#"{
            "success": true,
            "qa_pairs": [
                {"question": "ఎవరు?", "answer": "రాముడు", "type": "who"},
                {"question": "ఎక్కడ?", "answer": "అయోధ్య", "type": "where"}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        let pairs = response.into_pairs().unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].kind, "who");
        assert_eq!(pairs[1].question, "ఎక్కడ?");
    }

    #[test]
    fn success_without_pairs_is_empty_not_an_error() {
        let response: GenerateResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.into_pairs().unwrap(), Vec::new());
    }

    #[test]
    fn failure_carries_service_message() {
        let body = r#"{"success": false, "error": "Paragraph is required"}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        match response.into_pairs() {
            Err(ApiError::Service(message)) => assert_eq!(message, "Paragraph is required"),
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn error_body_without_success_field_keeps_service_message() {
        // The service's 400/500 bodies carry only the error string.
        let response: GenerateResponse =
            serde_json::from_str(r#"{"error": "Paragraph is required"}"#).unwrap();
        match response.into_pairs() {
            Err(ApiError::Service(message)) => assert_eq!(message, "Paragraph is required"),
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_message_falls_back_to_generic() {
        let response: GenerateResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        match response.into_pairs() {
            Err(ApiError::Service(message)) => assert_eq!(message, GENERIC_FAILURE),
            other => panic!("expected service error, got {other:?}"),
        }
    }
}
