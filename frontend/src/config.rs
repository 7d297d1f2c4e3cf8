//! Application configuration.
//!
//! Centralized configuration for the ScanView frontend.
//! Everything is fixed at compile time; there is no runtime config file.

/// Prediction service base URL.
///
/// The inference server the frontend talks to.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Path of the prediction endpoint (multipart `POST`).
pub const PREDICT_PATH: &str = "/predict";

/// Path of the health check endpoint (`GET`).
pub const HEALTH_PATH: &str = "/health";

/// Multipart field name carrying the image.
pub const FILE_FIELD: &str = "file";

/// `accept` filter for the file picker. Advisory only.
pub const ACCEPTED_TYPES: &str = "image/*";

/// Shown when the server fails without a usable `error` field.
pub const GENERIC_SERVER_ERROR: &str = "Server error occurred.";

/// Blocking alert shown when upload is clicked with nothing selected.
pub const MISSING_FILE_ALERT: &str = "Please upload an image first.";

/// Document title and page heading.
pub const APP_TITLE: &str = "Breast Cancer Detection";

/// Build a full endpoint URL from a base and a path.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(endpoint("http://localhost:5000/", PREDICT_PATH), "http://localhost:5000/predict");
        assert_eq!(endpoint(BACKEND_URL, HEALTH_PATH), "http://localhost:5000/health");
    }
}
