use super::{Adjustment, YieldRule};
use crate::models::{FarmInput, WeatherSnapshot};

/// Soil pH suitability rule
///
/// Most field crops take up nutrients best in slightly acidic to neutral
/// soil. Inside the 6.0-7.5 band the estimate gets a boost; any reading
/// outside it is penalized. No reading, no adjustment.
pub struct SoilPhRule;

const OPTIMAL_MIN: f64 = 6.0;
const OPTIMAL_MAX: f64 = 7.5;

impl YieldRule for SoilPhRule {
    fn id(&self) -> &'static str {
        "soil_ph"
    }

    fn evaluate(&self, input: &FarmInput, _weather: &WeatherSnapshot) -> Option<Adjustment> {
        let ph = input.soil_ph?;

        if (OPTIMAL_MIN..=OPTIMAL_MAX).contains(&ph) {
            Some(Adjustment {
                multiplier: 1.1,
                factor: "Optimal soil pH",
            })
        } else {
            Some(Adjustment {
                multiplier: 0.9,
                factor: "Sub-optimal soil pH",
            })
        }
    }
}
