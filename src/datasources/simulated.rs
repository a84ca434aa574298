use rand::Rng;

use super::WeatherSource;
use crate::models::WeatherSnapshot;

/// Pseudo-random weather supplier standing in for a real weather API.
///
/// Samples fall in fixed bands: temperature [25, 35) °C, rainfall
/// [50, 150) mm, humidity [60, 90) %. The location is accepted for
/// interface compatibility but does not influence the sample.
pub struct SimulatedWeather;

impl WeatherSource for SimulatedWeather {
    fn sample(&self, _location: &str) -> WeatherSnapshot {
        let mut rng = rand::thread_rng();
        WeatherSnapshot {
            temperature: rng.gen_range(25.0..35.0),
            rainfall: rng.gen_range(50.0..150.0),
            humidity: rng.gen_range(60.0..90.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_within_bands() {
        let source = SimulatedWeather;
        for _ in 0..200 {
            let w = source.sample("Punjab");
            assert!((25.0..35.0).contains(&w.temperature));
            assert!((50.0..150.0).contains(&w.rainfall));
            assert!((60.0..90.0).contains(&w.humidity));
        }
    }
}
