use crate::api::models::*;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

pub async fn location_details_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LocationDetail>, AppError> {
    // The segment is taken raw so a malformed id gets the API's JSON 400
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("location id must be an integer".to_string()))?;

    info!(id, "Looking up location details");

    let record = usize::try_from(id)
        .ok()
        .and_then(|id| state.store.get(id))
        .ok_or(AppError::NotFound)?;

    Ok(Json(LocationDetail::from_record(record)))
}
