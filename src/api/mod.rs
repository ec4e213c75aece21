pub mod locations;
pub mod models;
pub mod risk_data;
pub mod statistics;

// Re-exports
pub use models::*;

// Health and index handlers (simple, keep here)
use axum::{extract::State, response::Html, Json};

pub async fn health_handler(State(state): State<AppState>) -> Json<models::HealthResponse> {
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_locations: state.store.len(),
    })
}

/// Landing page. The map front end consuming the API is a separate
/// project; this page just documents the endpoints.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
