use chrono::Datelike;

use super::{Adjustment, YieldRule};
use crate::models::{FarmInput, WeatherSnapshot};

/// Sowing timing rule
///
/// Rewards sowing inside the crop's optimal months. Crops without an
/// established window (and unlisted crops) never match, as does a missing
/// sowing date.
pub struct SowingWindowRule;

impl YieldRule for SowingWindowRule {
    fn id(&self) -> &'static str {
        "sowing_window"
    }

    fn evaluate(&self, input: &FarmInput, _weather: &WeatherSnapshot) -> Option<Adjustment> {
        let crop = input.crop?;
        let month = input.sowing_date?.month();

        if crop.sowing_window().contains(&month) {
            Some(Adjustment {
                multiplier: 1.1,
                factor: "Optimal sowing time",
            })
        } else {
            None
        }
    }
}
