use super::{Adjustment, YieldRule};
use crate::models::{FarmInput, WeatherSnapshot};

/// Historical performance rule
///
/// A previous harvest above the theoretical average for this land size
/// (base yield × area) suggests better-than-average field conditions.
/// Fires only when a previous yield was reported.
pub struct HistoryRule;

impl YieldRule for HistoryRule {
    fn id(&self) -> &'static str {
        "history"
    }

    fn evaluate(&self, input: &FarmInput, _weather: &WeatherSnapshot) -> Option<Adjustment> {
        let previous_yield = input.previous_yield?;
        let average_yield = input.base_yield() * input.land_size;

        if previous_yield > average_yield {
            Some(Adjustment {
                multiplier: 1.05,
                factor: "Good historical performance",
            })
        } else {
            None
        }
    }
}
