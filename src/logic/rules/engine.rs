use super::{
    history::HistoryRule, npk::NpkRule, rainfall::RainfallRule, soil_ph::SoilPhRule,
    sowing_window::SowingWindowRule, temperature::TemperatureRule, YieldRule,
};
use crate::models::{FarmInput, WeatherSnapshot};

/// Ordered set of yield adjustment rules.
///
/// The order here is load-bearing: the response's factor list follows it.
pub struct YieldEngine {
    rules: Vec<Box<dyn YieldRule>>,
}

impl YieldEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn YieldRule>> = vec![
            Box::new(SoilPhRule),
            Box::new(NpkRule),
            Box::new(RainfallRule),
            Box::new(TemperatureRule),
            Box::new(HistoryRule),
            Box::new(SowingWindowRule),
        ];

        Self { rules }
    }

    /// Run every rule in order, compounding multipliers and collecting the
    /// labels of rules that fired.
    pub fn evaluate(&self, input: &FarmInput, weather: &WeatherSnapshot) -> (f64, Vec<String>) {
        let mut multiplier = 1.0;
        let mut factors = Vec::new();

        for rule in &self.rules {
            if let Some(adjustment) = rule.evaluate(input, weather) {
                multiplier *= adjustment.multiplier;
                factors.push(adjustment.factor.to_string());
            }
        }

        (multiplier, factors)
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

impl Default for YieldEngine {
    fn default() -> Self {
        Self::new()
    }
}
