use crate::api::models::AppState;
use crate::api::risk_data::handlers::risk_data_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/risk-data", get(risk_data_handler))
}
