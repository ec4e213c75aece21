use crate::api::models::*;
use crate::dataset::RiskRecord;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

pub async fn risk_data_handler(
    State(state): State<AppState>,
    Query(params): Query<RiskRangeParams>,
) -> Result<Json<Vec<RiskRecord>>, AppError> {
    // Validate
    let (min_risk, max_risk) = params.validate().map_err(AppError::BadRequest)?;

    info!(min_risk, max_risk, "Filtering risk data");

    let records = state.store.records_in_range(min_risk, max_risk);

    info!(matched = records.len(), "Filter complete");

    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generator::{build_record, MetricSample};
    use crate::dataset::locations::seed_locations;
    use crate::dataset::RiskStore;
    use crate::risk::RiskLevel;
    use std::sync::Arc;

    // Ten records over the full seed list. Location 0 gets rigged metrics
    // scoring exactly 50.0 (High); the rest score 1.25 (Low).
    fn fixture_state() -> AppState {
        let locations = seed_locations();
        let rigged = MetricSample {
            accidents: 50,
            severity: 10.0,
            traffic_volume: 1000,
            weather_impact: 2.0,
        };
        let quiet = MetricSample {
            accidents: 5,
            severity: 1.0,
            traffic_volume: 100,
            weather_impact: 0.5,
        };

        let records = locations
            .iter()
            .enumerate()
            .map(|(id, loc)| build_record(id, loc, if id == 0 { rigged } else { quiet }))
            .collect();

        AppState {
            store: Arc::new(RiskStore::from_records(records)),
        }
    }

    fn range(min: &str, max: &str) -> Query<RiskRangeParams> {
        Query(RiskRangeParams {
            min_risk: Some(min.to_string()),
            max_risk: Some(max.to_string()),
        })
    }

    #[tokio::test]
    async fn test_default_range_returns_all_in_order() {
        let Json(records) = risk_data_handler(
            State(fixture_state()),
            Query(RiskRangeParams::default()),
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 10);
        let ids: Vec<usize> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_exact_bounds_include_matching_record() {
        let Json(records) = risk_data_handler(State(fixture_state()), range("50", "50"))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].location, "MG Road");
        assert_eq!(records[0].risk_score, 50.0);
        assert_eq!(records[0].risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn test_range_above_all_scores_is_empty() {
        let Json(records) = risk_data_handler(State(fixture_state()), range("101", "200"))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_inverted_range_is_empty_not_an_error() {
        let Json(records) = risk_data_handler(State(fixture_state()), range("60", "40"))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_bound_is_bad_request() {
        let err = risk_data_handler(
            State(fixture_state()),
            Query(RiskRangeParams {
                min_risk: Some("abc".to_string()),
                max_risk: None,
            }),
        )
        .await
        .unwrap_err();

        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "min_risk must be a number"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }
}
