//! HR Analytics Dashboard
//!
//! Web dashboard for two machine learning demos backed by an external
//! prediction service: employee attrition prediction, and a data leakage
//! experiment comparing a broken model with a fixed one.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  form post  ┌──────────────────────────────────────┐  JSON POST  ┌────────────┐
//! │ Browser  │ ──────────▶ │  Dashboard (Axum)                    │ ──────────▶ │ Prediction │
//! │          │ ◀────────── │  session ─▶ page ─▶ form ─▶ client   │ ◀────────── │  service   │
//! └──────────┘    HTML     └──────────────────────────────────────┘   result    └────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod views;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

use client::ApiClient;
use config::Config;
use middleware::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            api: ApiClient::new(config.api_base_url.clone()),
            sessions: Arc::new(SessionStore::new(config.session_idle_minutes)),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Public routes (no session)
    let public_routes = Router::new()
        .route("/", get(handlers::home::index))
        .route("/health", get(handlers::health::check));

    // Dashboard pages (per-browser session)
    let dashboard_routes = Router::new()
        .route("/attrition", get(handlers::attrition::show).post(handlers::attrition::submit))
        .route("/attrition/model", post(handlers::attrition::select_model))
        .route("/leakage", get(handlers::leakage::show))
        .route("/leakage/tab", post(handlers::leakage::switch_tab))
        .route("/leakage/broken", post(handlers::leakage::submit_broken))
        .route("/leakage/fixed", post(handlers::leakage::submit_fixed))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::require_session
        ));

    Router::new()
        .merge(public_routes)
        .merge(dashboard_routes)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
