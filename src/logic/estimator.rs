use std::sync::Arc;

use super::confidence::ConfidenceModel;
use super::rules::YieldEngine;
use crate::models::{FarmInput, WeatherSnapshot};

/// Output of the estimator before advisory text is attached.
#[derive(Debug, Clone)]
pub struct YieldEstimate {
    pub predicted_yield: f64,
    pub confidence: u8,
    pub factors: Vec<String>,
}

/// Heuristic yield estimator.
///
/// Pure given its inputs: base yield × land size × the compounded rule
/// multiplier, rounded to 2 decimals. Confidence comes from the injected
/// model so the whole computation is reproducible in tests.
pub struct YieldEstimator {
    engine: YieldEngine,
    confidence: Arc<dyn ConfidenceModel>,
}

impl YieldEstimator {
    pub fn new(confidence: Arc<dyn ConfidenceModel>) -> Self {
        Self {
            engine: YieldEngine::new(),
            confidence,
        }
    }

    pub fn estimate(&self, input: &FarmInput, weather: &WeatherSnapshot) -> YieldEstimate {
        let (multiplier, factors) = self.engine.evaluate(input, weather);
        let raw_yield = input.base_yield() * input.land_size * multiplier;

        YieldEstimate {
            predicted_yield: round2(raw_yield),
            confidence: self.confidence.score(input),
            factors,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::confidence::FieldCoverageConfidence;
    use chrono::NaiveDate;

    fn estimator() -> YieldEstimator {
        YieldEstimator::new(Arc::new(FieldCoverageConfidence))
    }

    #[test]
    fn unknown_crop_uses_default_base_yield() {
        let input = FarmInput::new("dragonfruit", 5.0, "Kerala");
        let weather = WeatherSnapshot {
            temperature: 28.0,
            rainfall: 70.0,
            humidity: 65.0,
        };
        let estimate = estimator().estimate(&input, &weather);
        assert_eq!(estimate.predicted_yield, 10.0);
        assert!(estimate.factors.is_empty());
    }

    #[test]
    fn worked_example_wheat_in_punjab() {
        // wheat, 10 acres, pH 6.5, N/P/K 50/25/35, sown in December,
        // 28°C / 120mm / 70%:
        //   2.5 × 10 × 1.1 × (0.8 + 110/300 × 0.4) × 1.05 × 1.1 = 30.0685
        let input = FarmInput::new("wheat", 10.0, "Punjab")
            .with_soil_ph(6.5)
            .with_npk(50.0, 25.0, 35.0)
            .with_sowing_date(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        let weather = WeatherSnapshot {
            temperature: 28.0,
            rainfall: 120.0,
            humidity: 70.0,
        };

        let estimate = estimator().estimate(&input, &weather);

        assert_eq!(estimate.predicted_yield, 30.07);
        assert_eq!(
            estimate.factors,
            vec![
                "Optimal soil pH",
                "NPK levels considered",
                "Good rainfall expected",
                "Optimal sowing time",
            ]
        );
        // previous_yield absent, so no historical factor
        assert!(!estimate
            .factors
            .iter()
            .any(|f| f == "Good historical performance"));
        assert_eq!(estimate.confidence, 86);
    }

    #[test]
    fn confidence_is_always_within_contract_band() {
        let weather = WeatherSnapshot {
            temperature: 40.0,
            rainfall: 10.0,
            humidity: 95.0,
        };
        let sparse = FarmInput::new("rice", 2.0, "Assam");
        let full = FarmInput::new("rice", 2.0, "Assam")
            .with_soil_ph(5.0)
            .with_npk(10.0, 5.0, 5.0)
            .with_previous_yield(1.0);

        for input in [sparse, full] {
            let estimate = estimator().estimate(&input, &weather);
            assert!((70..=95).contains(&estimate.confidence));
        }
    }

    #[test]
    fn rounding_is_two_decimal_places() {
        assert_eq!(round2(30.0685), 30.07);
        assert_eq!(round2(29.994), 29.99);
        assert_eq!(round2(0.0), 0.0);
    }
}
