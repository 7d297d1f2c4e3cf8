//! Health check against the prediction service.

use gloo_net::http::Request;

use crate::config::{endpoint, HEALTH_PATH};
use crate::types::{AppError, AppResult, BackendState, HealthStatus};

/// Fetch `/health` from the prediction service.
pub async fn fetch_health(base_url: &str) -> AppResult<HealthStatus> {
    let url = endpoint(base_url, HEALTH_PATH);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Server {
            status: response.status(),
            message: format!("Health check returned {}", response.status()),
        });
    }

    response
        .json::<HealthStatus>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Collapse a health check outcome into what the badge shows.
pub fn backend_state(outcome: &AppResult<HealthStatus>) -> BackendState {
    match outcome {
        Ok(health) => BackendState::from_health(health),
        Err(_) => BackendState::Offline,
    }
}
