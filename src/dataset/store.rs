use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::dataset::generator::{self, RiskRecord};
use crate::dataset::locations::seed_locations;
use crate::risk::round2;

/// Aggregate figures over the whole dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_locations: usize,
    pub total_accidents: u64,
    pub average_risk: f64,
    pub high_risk_areas: usize,
    pub last_updated: String,
}

/// In-memory risk dataset, generated once at startup and read-only after.
///
/// Handlers share it behind an `Arc`; no locking is needed because nothing
/// mutates it after construction.
pub struct RiskStore {
    records: Vec<RiskRecord>,
}

impl RiskStore {
    /// Generate the dataset from the built-in seed locations.
    ///
    /// Without a seed every process start draws fresh data; with a seed
    /// runs are reproducible.
    pub fn generate(seed: Option<u64>) -> Self {
        let locations = seed_locations();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let records = generator::generate(&locations, &mut rng);

        info!(
            records = records.len(),
            seeded = seed.is_some(),
            "Generated sample risk dataset"
        );

        Self { records }
    }

    /// Build a store from prepared records, for fixture datasets.
    pub fn from_records(records: Vec<RiskRecord>) -> Self {
        Self { records }
    }

    /// Records whose risk score lies in `[min, max]`, dataset order
    /// preserved. An inverted range yields an empty list, not an error.
    pub fn records_in_range(&self, min: f64, max: f64) -> Vec<RiskRecord> {
        self.records
            .iter()
            .filter(|r| r.risk_score >= min && r.risk_score <= max)
            .cloned()
            .collect()
    }

    /// Aggregate statistics over the entire dataset, stamped at call time.
    pub fn statistics(&self) -> Statistics {
        let total_locations = self.records.len();
        let total_accidents = self.records.iter().map(|r| u64::from(r.accidents)).sum();
        let high_risk_areas = self
            .records
            .iter()
            .filter(|r| r.risk_score >= 50.0)
            .count();

        // Mean of zero records is undefined; report 0.0 instead of dividing
        let average_risk = if self.is_empty() {
            0.0
        } else {
            let sum: f64 = self.records.iter().map(|r| r.risk_score).sum();
            round2(sum / total_locations as f64)
        };

        Statistics {
            total_locations,
            total_accidents,
            average_risk,
            high_risk_areas,
            last_updated: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Look up a record by id. Ids are dense list positions.
    pub fn get(&self, id: usize) -> Option<&RiskRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
