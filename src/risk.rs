use serde::Serialize;

const ACCIDENT_WEIGHT: f64 = 0.4;
const SEVERITY_WEIGHT: f64 = 0.3;
const TRAFFIC_WEIGHT: f64 = 0.002;

/// Compute a bounded risk score from raw location metrics.
///
/// `(accidents * 0.4 + severity * 0.3 + traffic_volume * 0.002) * weather_impact`,
/// clamped to the 0-100 scale. Inputs are trusted internal values; no
/// validation happens at this layer.
pub fn score(accidents: u32, severity: f64, traffic_volume: u32, weather_impact: f64) -> f64 {
    let base = f64::from(accidents) * ACCIDENT_WEIGHT
        + severity * SEVERITY_WEIGHT
        + f64::from(traffic_volume) * TRAFFIC_WEIGHT;
    (base * weather_impact).clamp(0.0, 100.0)
}

/// Round to two decimals for display fields.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Categorical risk tier derived from a risk score.
///
/// Tier boundaries are inclusive on the lower bound: scores of exactly
/// 75, 50 and 25 belong to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Classify a risk score into its tier.
    pub fn from_score(risk_score: f64) -> Self {
        if risk_score >= 75.0 {
            RiskLevel::VeryHigh
        } else if risk_score >= 50.0 {
            RiskLevel::High
        } else if risk_score >= 25.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Display name used in JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }

    /// Safety recommendations for this tier.
    ///
    /// Content and order are fixed; the front end renders them verbatim.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::VeryHigh => &[
                "Install additional traffic lights",
                "Deploy traffic police during peak hours",
                "Add speed cameras",
                "Improve road lighting",
                "Consider traffic diversions",
            ],
            RiskLevel::High => &[
                "Add warning signs",
                "Improve road markings",
                "Regular police patrolling",
                "Monitor during bad weather",
            ],
            RiskLevel::Medium => &[
                "Monitor traffic patterns",
                "Maintain road conditions",
                "Public awareness campaigns",
            ],
            RiskLevel::Low => &[
                "Continue regular monitoring",
                "Maintain current safety measures",
            ],
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_formula() {
        // (50*0.4 + 10*0.3 + 1000*0.002) * 2.0 = (20 + 3 + 2) * 2.0 = 50.0
        assert_eq!(score(50, 10.0, 1000, 2.0), 50.0);
        // (5*0.4 + 1*0.3 + 100*0.002) * 0.5 = 2.5 * 0.5 = 1.25
        assert_eq!(score(5, 1.0, 100, 0.5), 1.25);
    }

    #[test]
    fn test_score_clamps_to_scale() {
        // Out-of-range inputs still land inside the 0-100 scale
        assert_eq!(score(500, 10.0, 1000, 2.0), 100.0);
        assert_eq!(score(0, -200.0, 0, 1.0), 0.0);
    }

    #[test]
    fn test_score_bounded_over_metric_ranges() {
        // Corners of the generator's metric ranges
        for accidents in [5u32, 50] {
            for severity in [1.0, 10.0] {
                for traffic in [100u32, 1000] {
                    for weather in [0.5, 2.0] {
                        let s = score(accidents, severity, traffic, weather);
                        assert!((0.0..=100.0).contains(&s), "score {} out of range", s);
                    }
                }
            }
        }
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(75.0), RiskLevel::VeryHigh);
        assert_eq!(RiskLevel::from_score(74.999), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(50.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(49.999), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(25.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(24.999), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::VeryHigh);
    }

    #[test]
    fn test_level_serializes_with_display_name() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::VeryHigh).unwrap(),
            "\"Very High\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"Low\"");
    }

    #[test]
    fn test_recommendations_are_fixed_lists() {
        assert_eq!(
            RiskLevel::VeryHigh.recommendations(),
            [
                "Install additional traffic lights",
                "Deploy traffic police during peak hours",
                "Add speed cameras",
                "Improve road lighting",
                "Consider traffic diversions",
            ]
        );
        assert_eq!(RiskLevel::High.recommendations().len(), 4);
        assert_eq!(
            RiskLevel::Medium.recommendations(),
            [
                "Monitor traffic patterns",
                "Maintain road conditions",
                "Public awareness campaigns",
            ]
        );
        assert_eq!(
            RiskLevel::Low.recommendations(),
            ["Continue regular monitoring", "Maintain current safety measures"]
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(49.8567), 49.86);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(50.0), 50.0);
    }
}
