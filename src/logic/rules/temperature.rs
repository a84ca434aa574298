use super::{Adjustment, YieldRule};
use crate::models::{FarmInput, WeatherSnapshot};

/// Heat stress rule
///
/// Sustained temperatures above 35°C reduce grain fill for the crops in
/// the reference table. Cooler weather carries no adjustment either way.
pub struct TemperatureRule;

const HEAT_STRESS_C: f64 = 35.0;

impl YieldRule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn evaluate(&self, _input: &FarmInput, weather: &WeatherSnapshot) -> Option<Adjustment> {
        if weather.temperature > HEAT_STRESS_C {
            Some(Adjustment {
                multiplier: 0.9,
                factor: "High temperature stress",
            })
        } else {
            None
        }
    }
}
