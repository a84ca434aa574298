use serde::{Deserialize, Serialize};

/// The minimal weather data the estimator consumes for a location at
/// prediction time. Not persisted; one snapshot per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Millimeters expected over the growing window.
    pub rainfall: f64,
    /// Relative humidity percentage.
    pub humidity: f64,
}
