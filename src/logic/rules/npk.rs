use super::{Adjustment, YieldRule};
use crate::models::{FarmInput, WeatherSnapshot};

/// NPK nutrient rule
///
/// Fires only when all three of nitrogen, phosphorus, and potassium were
/// reported. The combined level scales the multiplier linearly from the
/// 0.8 floor of the formula, capped at 1.2. The lower side is deliberately
/// not clamped: severely depleted soil keeps dragging the estimate down.
pub struct NpkRule;

/// Combined N+P+K level treated as a full score of 1.0.
const NPK_SCALE: f64 = 300.0;
const MAX_MULTIPLIER: f64 = 1.2;

impl YieldRule for NpkRule {
    fn id(&self) -> &'static str {
        "npk"
    }

    fn evaluate(&self, input: &FarmInput, _weather: &WeatherSnapshot) -> Option<Adjustment> {
        let nitrogen = input.nitrogen?;
        let phosphorus = input.phosphorus?;
        let potassium = input.potassium?;

        let npk_score = (nitrogen + phosphorus + potassium) / NPK_SCALE;
        let multiplier = f64::min(MAX_MULTIPLIER, 0.8 + npk_score * 0.4);

        Some(Adjustment {
            multiplier,
            factor: "NPK levels considered",
        })
    }
}
