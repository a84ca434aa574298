use chrono::NaiveDate;

use super::crop::{Crop, DEFAULT_BASE_YIELD};

/// Caller-supplied farm details, immutable for the duration of a request.
///
/// `crop_type` keeps the name exactly as the caller wrote it (advisory text
/// echoes it back); `crop` is the resolved table entry, or `None` for crops
/// outside the reference table.
#[derive(Debug, Clone)]
pub struct FarmInput {
    pub crop_type: String,
    pub crop: Option<Crop>,
    pub land_size: f64,
    pub soil_type: Option<String>,
    pub location: String,
    pub sowing_date: Option<NaiveDate>,
    pub previous_yield: Option<f64>,
    pub soil_ph: Option<f64>,
    pub organic_matter: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
}

impl FarmInput {
    pub fn new(crop_type: impl Into<String>, land_size: f64, location: impl Into<String>) -> Self {
        let crop_type = crop_type.into();
        let crop = Crop::from_name(&crop_type);
        Self {
            crop_type,
            crop,
            land_size,
            soil_type: None,
            location: location.into(),
            sowing_date: None,
            previous_yield: None,
            soil_ph: None,
            organic_matter: None,
            nitrogen: None,
            phosphorus: None,
            potassium: None,
        }
    }

    pub fn with_sowing_date(mut self, date: NaiveDate) -> Self {
        self.sowing_date = Some(date);
        self
    }

    pub fn with_soil_ph(mut self, ph: f64) -> Self {
        self.soil_ph = Some(ph);
        self
    }

    pub fn with_npk(mut self, nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        self.nitrogen = Some(nitrogen);
        self.phosphorus = Some(phosphorus);
        self.potassium = Some(potassium);
        self
    }

    pub fn with_previous_yield(mut self, tons: f64) -> Self {
        self.previous_yield = Some(tons);
        self
    }

    /// Reference yield for this crop, falling back for unlisted crops.
    pub fn base_yield(&self) -> f64 {
        self.crop.map_or(DEFAULT_BASE_YIELD, |c| c.base_yield())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_crop_from_name() {
        let input = FarmInput::new("WHEAT", 10.0, "Punjab");
        assert_eq!(input.crop, Some(Crop::Wheat));
        assert_eq!(input.base_yield(), 2.5);
    }

    #[test]
    fn unknown_crop_falls_back_to_default_base_yield() {
        let input = FarmInput::new("quinoa", 10.0, "Punjab");
        assert_eq!(input.crop, None);
        assert_eq!(input.base_yield(), DEFAULT_BASE_YIELD);
    }
}
