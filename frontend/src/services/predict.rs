//! HTTP client for the prediction endpoint.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::{endpoint, FILE_FIELD, GENERIC_SERVER_ERROR, PREDICT_PATH};
use crate::types::{AppError, AppResult, ErrorBody, PredictionResult};

/// Anything that can turn a file into a prediction.
#[allow(async_fn_in_trait)]
pub trait PredictClient<F> {
    async fn predict(&self, file: &F) -> AppResult<PredictionResult>;
}

/// Talks to the prediction service over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpPredictClient {
    base_url: String,
}

impl HttpPredictClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url(&self) -> String {
        endpoint(&self.base_url, PREDICT_PATH)
    }
}

impl PredictClient<File> for HttpPredictClient {
    async fn predict(&self, file: &File) -> AppResult<PredictionResult> {
        let form_data = FormData::new().map_err(|e| AppError::Request(js_error_message(&e)))?;
        form_data
            .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
            .map_err(|e| AppError::Request(js_error_message(&e)))?;

        let request = Request::post(&self.url())
            .body(form_data)
            .map_err(|e| AppError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        // An unreadable body is treated like an empty one.
        let body = response.text().await.unwrap_or_default();

        interpret_response(status, &body)
    }
}

/// Map a status code and body text to the prediction outcome.
///
/// Non-2xx responses use the body's `error` field when present and fall
/// back to [`GENERIC_SERVER_ERROR`] for missing, empty or non-JSON bodies.
pub fn interpret_response(status: u16, body: &str) -> AppResult<PredictionResult> {
    if !(200..300).contains(&status) {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        if let Some(details) = parsed.details.as_deref() {
            log::warn!("Server error details ({}): {}", status, details);
        }
        let message = parsed
            .error
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
        return Err(AppError::Server { status, message });
    }

    serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
}

/// Best-effort text of a thrown JS value.
fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_parses() {
        let result = interpret_response(200, r#"{"class": "benign", "confidence": 87.3}"#).unwrap();
        assert_eq!(result.label, "benign");
        assert_eq!(result.confidence_label(), "87.30%");
    }

    #[test]
    fn test_error_field_is_used() {
        let err = interpret_response(400, r#"{"error": "bad image"}"#).unwrap_err();
        assert_eq!(err, AppError::Server { status: 400, message: "bad image".into() });
        assert_eq!(format!("Error: {}", err), "Error: bad image");
    }

    #[test]
    fn test_internal_error_shows_error_not_details() {
        let body = r#"{"error": "An error occurred during prediction", "details": "Model not loaded"}"#;
        let err = interpret_response(500, body).unwrap_err();
        assert_eq!(err.to_string(), "An error occurred during prediction");
    }

    #[test]
    fn test_missing_body_falls_back_to_generic() {
        assert_eq!(interpret_response(500, "").unwrap_err().to_string(), GENERIC_SERVER_ERROR);
        assert_eq!(interpret_response(502, "<html>Bad Gateway</html>").unwrap_err().to_string(), GENERIC_SERVER_ERROR);
        assert_eq!(interpret_response(400, "{}").unwrap_err().to_string(), GENERIC_SERVER_ERROR);
        assert_eq!(interpret_response(400, r#"{"error": ""}"#).unwrap_err().to_string(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = interpret_response(200, r#"{"label": "benign"}"#).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_client_url() {
        let client = HttpPredictClient::new("http://localhost:5000");
        assert_eq!(client.url(), "http://localhost:5000/predict");
    }
}
