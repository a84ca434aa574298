use crate::models::FarmInput;

/// Lowest confidence the model may report.
pub const MIN_CONFIDENCE: u8 = 70;
/// Highest confidence the model may report.
pub const MAX_CONFIDENCE: u8 = 95;

/// Scores how much trust to place in an estimate, as an integer
/// percentage in [`MIN_CONFIDENCE`, `MAX_CONFIDENCE`].
///
/// Injected into the estimator so tests can pin the value.
pub trait ConfidenceModel: Send + Sync {
    fn score(&self, input: &FarmInput) -> u8;
}

/// Confidence derived from input completeness: each optional measurement
/// the farmer supplies narrows the uncertainty, so the score climbs from
/// the floor by a fixed step per field.
pub struct FieldCoverageConfidence;

const STEP_PER_FIELD: u8 = 4;

impl ConfidenceModel for FieldCoverageConfidence {
    fn score(&self, input: &FarmInput) -> u8 {
        let supplied = [
            input.previous_yield.is_some(),
            input.soil_ph.is_some(),
            input.organic_matter.is_some(),
            input.nitrogen.is_some(),
            input.phosphorus.is_some(),
            input.potassium.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count() as u8;

        MIN_CONFIDENCE
            .saturating_add(supplied * STEP_PER_FIELD)
            .min(MAX_CONFIDENCE)
    }
}
