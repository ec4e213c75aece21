pub mod generator;
pub mod locations;
pub mod store;

pub use generator::RiskRecord;
pub use locations::Location;
pub use store::{RiskStore, Statistics};
