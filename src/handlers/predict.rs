//! The yield prediction endpoint.
//!
//! The form submits every field as a string, so the boundary parses
//! numeric values before the core runs; the core only ever sees
//! strongly-typed inputs.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::logic::advisor;
use crate::models::{FarmInput, PredictionResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictYieldRequest {
    #[serde(default)]
    pub crop_type: Option<String>,
    #[serde(default)]
    pub land_size: Option<String>,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub sowing_date: Option<String>,
    #[serde(default)]
    pub previous_yield: Option<String>,
    #[serde(default)]
    pub soil_ph: Option<String>,
    #[serde(default)]
    pub organic_matter: Option<String>,
    #[serde(default)]
    pub nitrogen: Option<String>,
    #[serde(default)]
    pub phosphorus: Option<String>,
    #[serde(default)]
    pub potassium: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictYieldResponse {
    pub success: bool,
    pub prediction: PredictionResult,
}

pub async fn predict_yield(
    State(state): State<AppState>,
    Json(request): Json<PredictYieldRequest>,
) -> AppResult<Json<PredictYieldResponse>> {
    // Validation happens before any weather lookup.
    let input = request.into_farm_input()?;

    let weather = state.weather.sample(&input.location);
    let estimate = state.estimator.estimate(&input, &weather);
    let recommendations = advisor::recommend(&input, &weather, &estimate);

    tracing::debug!(
        crop = %input.crop_type,
        location = %input.location,
        predicted_yield = estimate.predicted_yield,
        "prediction computed"
    );

    Ok(Json(PredictYieldResponse {
        success: true,
        prediction: PredictionResult {
            predicted_yield: estimate.predicted_yield,
            confidence: estimate.confidence,
            factors: estimate.factors,
            weather,
            recommendations,
        },
    }))
}

impl PredictYieldRequest {
    fn into_farm_input(self) -> Result<FarmInput, AppError> {
        let crop_type = required_text(self.crop_type)?;
        let location = required_text(self.location)?;
        let land_size_raw = required_text(self.land_size)?;

        let land_size = land_size_raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| *v > 0.0)
            .ok_or_else(|| AppError::validation("landSize must be a positive number"))?;

        let mut input = FarmInput::new(crop_type, land_size, location);
        input.soil_type = self.soil_type.filter(|s| !s.trim().is_empty());
        input.sowing_date = parse_date("sowingDate", self.sowing_date)?;
        input.previous_yield = parse_number("previousYield", self.previous_yield)?;
        input.soil_ph = parse_number("soilPh", self.soil_ph)?;
        input.organic_matter = parse_number("organicMatter", self.organic_matter)?;
        input.nitrogen = parse_number("nitrogen", self.nitrogen)?;
        input.phosphorus = parse_number("phosphorus", self.phosphorus)?;
        input.potassium = parse_number("potassium", self.potassium)?;

        Ok(input)
    }
}

fn required_text(value: Option<String>) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("Missing required fields"))
}

/// Optional numeric-as-string field: blank counts as absent, anything
/// non-blank must parse.
fn parse_number(field: &str, value: Option<String>) -> Result<Option<f64>, AppError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("{field} must be a number"))),
        _ => Ok(None),
    }
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>, AppError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("{field} must be an ISO date (YYYY-MM-DD)"))),
        _ => Ok(None),
    }
}
