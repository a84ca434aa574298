pub mod engine;
pub mod history;
pub mod npk;
pub mod rainfall;
pub mod soil_ph;
pub mod sowing_window;
pub mod temperature;

pub use engine::YieldEngine;

use crate::models::{FarmInput, WeatherSnapshot};

/// Effect of a rule that fired: a multiplicative adjustment to the yield
/// estimate plus the label surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub multiplier: f64,
    pub factor: &'static str,
}

/// Trait for yield adjustment rules.
///
/// Rules are evaluated in a fixed order by the engine; the factor list in
/// the response follows that order, so ordering is part of the contract.
pub trait YieldRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Evaluate the rule and return an adjustment if its conditions are met
    fn evaluate(&self, input: &FarmInput, weather: &WeatherSnapshot) -> Option<Adjustment>;
}
