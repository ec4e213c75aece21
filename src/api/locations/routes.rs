use crate::api::locations::handlers::location_details_handler;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/location-details/{id}", get(location_details_handler))
}
