//! HR Analytics Dashboard server

use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hr_analytics_dashboard::{
    config::{Config, LogFormat},
    create_router, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration; a missing API_BASE_URL stops here
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    init_logging(config.log_format);

    tracing::info!("HR Analytics Dashboard starting...");
    tracing::info!("Prediction service: {}", config.api_base_url);

    let state = AppState::new(&config);
    let app = create_router(state);

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hr_analytics_dashboard=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
