use rand::Rng;
use serde::Serialize;

use crate::dataset::locations::Location;
use crate::risk::{self, RiskLevel};

/// One synthetic accident-risk record, derived from a seed location.
///
/// Field order matches the JSON wire shape consumed by the map UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskRecord {
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
}

/// Raw metric draws for one location, before display rounding.
#[derive(Debug, Clone, Copy)]
pub struct MetricSample {
    pub accidents: u32,
    pub severity: f64,
    pub traffic_volume: u32,
    pub weather_impact: f64,
}

/// Draw one set of metrics from the demo distributions: accidents in
/// [5, 50], severity in [1.0, 10.0], traffic volume in [100, 1000],
/// weather impact in [0.5, 2.0], all uniform and independent.
fn sample_metrics<R: Rng>(rng: &mut R) -> MetricSample {
    MetricSample {
        accidents: rng.gen_range(5..=50),
        severity: rng.gen_range(1.0..=10.0),
        traffic_volume: rng.gen_range(100..=1000),
        weather_impact: rng.gen_range(0.5..=2.0),
    }
}

/// Assemble a record from a seed location and a metric sample.
///
/// The score is computed from the raw draws; stored floats are rounded to
/// two decimals for display. The tier is classified from the stored score.
pub fn build_record(id: usize, location: &Location, sample: MetricSample) -> RiskRecord {
    let risk_score = risk::round2(risk::score(
        sample.accidents,
        sample.severity,
        sample.traffic_volume,
        sample.weather_impact,
    ));

    RiskRecord {
        id,
        location: location.name.to_string(),
        lat: location.lat,
        lng: location.lng,
        accidents: sample.accidents,
        severity: risk::round2(sample.severity),
        traffic_volume: sample.traffic_volume,
        weather_impact: risk::round2(sample.weather_impact),
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
    }
}

/// Generate one record per seed location, in input order.
///
/// Runs once at startup. Ids are dense 0..N-1 matching list positions.
pub fn generate<R: Rng>(locations: &[Location], rng: &mut R) -> Vec<RiskRecord> {
    locations
        .iter()
        .enumerate()
        .map(|(id, location)| build_record(id, location, sample_metrics(rng)))
        .collect()
}
