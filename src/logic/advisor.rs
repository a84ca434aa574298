use super::estimator::YieldEstimate;
use crate::models::{Crop, FarmInput, RecommendationSet, WeatherSnapshot};

/// Nutrient levels below these are treated as deficient. A missing reading
/// is treated the same as a deficient one: the farmer gets the fertilizer
/// advice either way. That conflates "no data" with "known low", which is
/// preserved deliberately from the original advisory behavior.
const NITROGEN_ADEQUATE: f64 = 40.0;
const PHOSPHORUS_ADEQUATE: f64 = 20.0;
const POTASSIUM_ADEQUATE: f64 = 30.0;

const LOW_RAINFALL_MM: f64 = 50.0;
const HIGH_RAINFALL_MM: f64 = 150.0;
const FUNGAL_RISK_HUMIDITY: f64 = 80.0;
const SOIL_TEST_CONFIDENCE: u8 = 80;

/// Build the four advisory buckets for a finished estimate.
///
/// Deterministic given its inputs; every rule is evaluated independently,
/// so one request can trigger several messages per bucket.
pub fn recommend(
    input: &FarmInput,
    weather: &WeatherSnapshot,
    estimate: &YieldEstimate,
) -> RecommendationSet {
    let mut recs = RecommendationSet::default();

    // Fertilizer
    if deficient(input.nitrogen, NITROGEN_ADEQUATE) {
        recs.fertilizer.push(format!(
            "Apply 25-30 kg Urea per acre for {}",
            input.crop_type
        ));
    }
    if deficient(input.phosphorus, PHOSPHORUS_ADEQUATE) {
        recs.fertilizer
            .push("Apply 15-20 kg DAP per acre to improve phosphorus levels".to_string());
    }
    if deficient(input.potassium, POTASSIUM_ADEQUATE) {
        recs.fertilizer
            .push("Apply 10-15 kg MOP per acre for potassium deficiency".to_string());
    }

    // Irrigation
    if weather.rainfall < LOW_RAINFALL_MM {
        recs.irrigation
            .push("Schedule irrigation every 7-10 days due to low rainfall forecast".to_string());
        recs.irrigation
            .push("Consider drip irrigation to conserve water".to_string());
    } else if weather.rainfall > HIGH_RAINFALL_MM {
        recs.irrigation
            .push("Ensure proper drainage to prevent waterlogging".to_string());
        recs.irrigation
            .push("Reduce irrigation frequency due to high rainfall".to_string());
    }

    // Pest control
    if weather.humidity > FUNGAL_RISK_HUMIDITY {
        recs.pest_control.push(
            "High humidity increases fungal disease risk - apply preventive fungicide".to_string(),
        );
    }
    if input.crop == Some(Crop::Cotton) {
        recs.pest_control
            .push("Monitor for bollworm infestation during flowering stage".to_string());
    }
    if input.crop == Some(Crop::Wheat) {
        recs.pest_control
            .push("Watch for rust diseases, especially during grain filling stage".to_string());
    }

    // General
    if estimate.confidence < SOIL_TEST_CONFIDENCE {
        recs.general
            .push("Consider soil testing for more accurate predictions".to_string());
    }
    recs.general.push(format!(
        "Optimal harvest time for {} is typically 90-120 days after sowing",
        input.crop_type
    ));
    recs.general.push(
        "Monitor crop regularly and maintain farm records for better future predictions"
            .to_string(),
    );

    recs
}

fn deficient(level: Option<f64>, adequate: f64) -> bool {
    level.map_or(true, |v| v < adequate)
}
