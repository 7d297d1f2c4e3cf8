//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Prediction service request/response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// API Response Types
// =============================================================================

/// Successful response of the prediction endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted label, e.g. "Benign"
    #[serde(rename = "class")]
    pub label: String,
    /// Confidence in percent (0-100)
    pub confidence: f64,
}

impl PredictionResult {
    /// Confidence rendered with two decimals and a percent sign.
    pub fn confidence_label(&self) -> String {
        format!("{:.2}%", self.confidence)
    }
}

/// Body of a failed prediction request.
///
/// Both fields are optional: the server may send only `error`,
/// `error` plus `details` (on internal failures), or nothing usable.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub details: Option<String>,
}

/// Response from the health check endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

/// What the header badge shows about the prediction service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendState {
    /// Health check not answered yet
    Checking,
    /// Server up, model loaded
    Ready,
    /// Server up, model missing
    ModelMissing,
    /// Server unreachable or answered garbage
    Offline,
}

impl BackendState {
    pub fn from_health(health: &HealthStatus) -> Self {
        if health.model_loaded {
            BackendState::Ready
        } else {
            BackendState::ModelMissing
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            BackendState::Checking => "status-checking",
            BackendState::Ready => "status-ready",
            BackendState::ModelMissing => "status-warning",
            BackendState::Offline => "status-offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackendState::Checking => "Checking backend...",
            BackendState::Ready => "Model ready",
            BackendState::ModelMissing => "Model not loaded",
            BackendState::Offline => "Backend offline",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// The `Display` output is what ends up in the error banner, so the
/// server variant prints the server's message verbatim.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The request never got an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A success response whose body is not a prediction.
    #[error("Invalid server response: {0}")]
    Decode(String),

    /// The request could not be assembled.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The selected file could not be read.
    #[error("Failed to read file: {0}")]
    FileRead(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_deserialization() {
        let json = r#"{"class": "benign", "confidence": 87.3}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.label, "benign");
        assert_eq!(result.confidence_label(), "87.30%");
    }

    #[test]
    fn test_confidence_label_rounds() {
        let result = PredictionResult { label: "Malignant".into(), confidence: 99.999 };
        assert_eq!(result.confidence_label(), "100.00%");

        let result = PredictionResult { label: "Benign".into(), confidence: 0.0 };
        assert_eq!(result.confidence_label(), "0.00%");
    }

    #[test]
    fn test_server_error_displays_message_only() {
        let err = AppError::Server { status: 400, message: "bad image".into() };
        assert_eq!(err.to_string(), "bad image");

        let err = AppError::Network("Failed to fetch".into());
        assert!(err.to_string().contains("Failed to fetch"));
    }

    #[test]
    fn test_backend_state_from_health() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "Healthy", "model_loaded": false}"#).unwrap();
        assert_eq!(BackendState::from_health(&health), BackendState::ModelMissing);

        let health = HealthStatus { status: "Healthy".into(), model_loaded: true };
        assert_eq!(BackendState::from_health(&health).label(), "Model ready");
    }
}
