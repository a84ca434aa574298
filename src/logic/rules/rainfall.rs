use super::{Adjustment, YieldRule};
use crate::models::{FarmInput, WeatherSnapshot};

/// Rainfall rule
///
/// Above 100 mm is favorable; below 30 mm is a drought signal. The band in
/// between (30-100 mm inclusive) is neutral and emits no factor.
pub struct RainfallRule;

const GOOD_RAINFALL_MM: f64 = 100.0;
const LOW_RAINFALL_MM: f64 = 30.0;

impl YieldRule for RainfallRule {
    fn id(&self) -> &'static str {
        "rainfall"
    }

    fn evaluate(&self, _input: &FarmInput, weather: &WeatherSnapshot) -> Option<Adjustment> {
        if weather.rainfall > GOOD_RAINFALL_MM {
            Some(Adjustment {
                multiplier: 1.05,
                factor: "Good rainfall expected",
            })
        } else if weather.rainfall < LOW_RAINFALL_MM {
            Some(Adjustment {
                multiplier: 0.85,
                factor: "Low rainfall - irrigation needed",
            })
        } else {
            None
        }
    }
}
