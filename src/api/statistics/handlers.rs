use crate::api::models::AppState;
use crate::dataset::Statistics;
use axum::{extract::State, Json};
use tracing::info;

pub async fn statistics_handler(State(state): State<AppState>) -> Json<Statistics> {
    let stats = state.store.statistics();

    info!(
        total_locations = stats.total_locations,
        high_risk_areas = stats.high_risk_areas,
        "Computed dataset statistics"
    );

    Json(stats)
}
