//! Liveness of the dashboard and reachability of the prediction service

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PredictionServiceHealth {
    pub base_url: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub active_sessions: usize,
    pub prediction_service: PredictionServiceHealth,
}

/// The dashboard stays "healthy" while the prediction service is down;
/// only the nested report changes.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = state.api.backend_status().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        active_sessions: state.sessions.len(),
        prediction_service: PredictionServiceHealth {
            base_url: state.api.base_url().to_string(),
            reachable: backend.is_ok(),
            error: backend.err().map(|e| e.to_string()),
        },
    })
}
