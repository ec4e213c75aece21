mod api;
mod config;
mod dataset;
mod risk;

use crate::api::{health_handler, index_handler, AppState};
use crate::config::AppConfig;
use crate::dataset::RiskStore;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Road Risk API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);
    match config.dataset.seed {
        Some(seed) => info!("   - Dataset seed: {}", seed),
        None => info!("   - Dataset seed: none (fresh data each start)"),
    }

    // Generate the in-memory dataset before accepting traffic
    info!("🎲 Generating sample risk dataset...");
    let store = Arc::new(RiskStore::generate(config.dataset.seed));
    info!("✅ Dataset ready ({} locations)", store.len());

    // Create application state
    let state = AppState { store };

    // Build router with modular routes
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(api::risk_data::routes())
        .merge(api::statistics::routes())
        .merge(api::locations::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                            - Demo landing page");
    info!("   GET  /health                      - Health check");
    info!("   GET  /api/risk-data               - Risk records, min_risk/max_risk filter");
    info!("   GET  /api/statistics              - Dataset-wide statistics");
    info!("   GET  /api/location-details/{{id}}   - One location with recommendations");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
