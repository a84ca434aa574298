use serde::{Deserialize, Serialize};

/// Base yield assumed for crops not in the reference table, tons per acre.
pub const DEFAULT_BASE_YIELD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crop {
    Wheat,
    Rice,
    Maize,
    Barley,
    Mustard,
    Cotton,
    Sugarcane,
    Soybean,
}

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Maize => "Maize",
            Crop::Barley => "Barley",
            Crop::Mustard => "Mustard",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Soybean => "Soybean",
        }
    }

    /// Case-insensitive lookup from a caller-supplied crop name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wheat" => Some(Crop::Wheat),
            "rice" => Some(Crop::Rice),
            "maize" => Some(Crop::Maize),
            "barley" => Some(Crop::Barley),
            "mustard" => Some(Crop::Mustard),
            "cotton" => Some(Crop::Cotton),
            "sugarcane" => Some(Crop::Sugarcane),
            "soybean" => Some(Crop::Soybean),
            _ => None,
        }
    }

    /// Reference yield in tons per acre under average conditions.
    pub fn base_yield(&self) -> f64 {
        match self {
            Crop::Wheat => 2.5,
            Crop::Rice => 3.0,
            Crop::Maize => 4.0,
            Crop::Barley => 2.0,
            Crop::Mustard => 0.8,
            Crop::Cotton => 1.5,
            Crop::Sugarcane => 45.0,
            Crop::Soybean => 1.2,
        }
    }

    /// Calendar months (1 = January) considered optimal for sowing.
    /// Crops without an established window never match.
    pub fn sowing_window(&self) -> &'static [u32] {
        match self {
            Crop::Wheat => &[11, 12, 1],
            Crop::Rice => &[6, 7, 8],
            Crop::Maize => &[3, 4, 7, 8],
            Crop::Barley => &[11, 12],
            Crop::Mustard => &[10, 11],
            Crop::Cotton => &[4, 5, 6],
            Crop::Sugarcane | Crop::Soybean => &[],
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
