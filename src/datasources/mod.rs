pub mod simulated;

pub use simulated::SimulatedWeather;

use crate::models::WeatherSnapshot;

/// Supplier of per-location weather snapshots.
///
/// The estimator treats this as an opaque data source; handlers hold it as
/// a trait object so tests can substitute fixed snapshots.
pub trait WeatherSource: Send + Sync {
    fn sample(&self, location: &str) -> WeatherSnapshot;
}
