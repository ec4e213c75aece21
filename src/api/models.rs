use crate::dataset::{RiskRecord, RiskStore};
use crate::risk::RiskLevel;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RiskStore>,
}

/// Query parameters for the risk-data endpoint.
///
/// Bounds arrive as raw strings so a non-numeric value becomes a 400 with
/// the API's JSON error shape instead of a framework rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RiskRangeParams {
    pub min_risk: Option<String>,
    pub max_risk: Option<String>,
}

impl RiskRangeParams {
    /// Resolve the bounds, defaulting to the full 0-100 scale.
    pub fn validate(&self) -> Result<(f64, f64), String> {
        let min = parse_bound(self.min_risk.as_deref(), "min_risk", 0.0)?;
        let max = parse_bound(self.max_risk.as_deref(), "max_risk", 100.0)?;
        Ok((min, max))
    }
}

fn parse_bound(raw: Option<&str>, name: &str, default: f64) -> Result<f64, String> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| format!("{} must be a number", name)),
    }
}

/// Detailed view of one location: the record plus safety recommendations.
#[derive(Debug, Serialize)]
pub struct LocationDetail {
    pub id: usize,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub accidents: u32,
    pub severity: f64,
    pub traffic_volume: u32,
    pub weather_impact: f64,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub recommendations: &'static [&'static str],
}

impl LocationDetail {
    /// Expand a record with the recommendation list for its tier.
    pub fn from_record(record: &RiskRecord) -> Self {
        Self {
            id: record.id,
            location: record.location.clone(),
            lat: record.lat,
            lng: record.lng,
            accidents: record.accidents,
            severity: record.severity,
            traffic_volume: record.traffic_volume,
            weather_impact: record.weather_impact,
            risk_score: record.risk_score,
            risk_level: record.risk_level,
            recommendations: record.risk_level.recommendations(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_locations: usize,
}

/// Error payload; the whole API reports errors as `{"error": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Location not found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
