//! Overview page handler

use axum::{extract::State, response::Html};

use crate::{views, AppState};

/// Dashboard overview with the prediction service status
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let status = state.api.backend_status().await;
    if let Err(e) = &status {
        tracing::warn!("Prediction service unreachable at {}: {}", state.api.base_url(), e);
    }

    Html(views::home::render(state.api.base_url(), &status))
}
