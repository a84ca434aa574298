use serde::{Deserialize, Serialize};

use super::weather::WeatherSnapshot;

/// Advisory text grouped by concern. Any bucket may be empty except
/// `general`, which always carries at least the harvest-timing and
/// record-keeping messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub fertilizer: Vec<String>,
    pub irrigation: Vec<String>,
    pub pest_control: Vec<String>,
    pub general: Vec<String>,
}

/// Full prediction payload returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Estimated harvest in tons, rounded to 2 decimal places.
    pub predicted_yield: f64,
    /// Integer percentage in [70, 95].
    pub confidence: u8,
    /// Labels of the rules that fired, in rule evaluation order.
    pub factors: Vec<String>,
    pub weather: WeatherSnapshot,
    pub recommendations: RecommendationSet,
}
