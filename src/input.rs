//! Field Input Types
//!
//! Soil and season class labels plus the per-request input vector that the
//! scoring paths consume. Labels match the crop recommendation model's
//! class lists; numeric fields are validated before any scoring happens.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{AdvisorError, Result};

/// Soil texture classes recognized by the requirement profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Alluvial,
    Black,
    Clayey,
    Loamy,
    Red,
    Sandy,
}

impl SoilType {
    /// Parse a soil label (case-insensitive, surrounding whitespace ignored)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "alluvial" => Some(SoilType::Alluvial),
            "black" => Some(SoilType::Black),
            "clayey" => Some(SoilType::Clayey),
            "loamy" => Some(SoilType::Loamy),
            "red" => Some(SoilType::Red),
            "sandy" => Some(SoilType::Sandy),
            _ => None,
        }
    }

    /// Canonical label for display
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Black => "Black",
            SoilType::Clayey => "Clayey",
            SoilType::Loamy => "Loamy",
            SoilType::Red => "Red",
            SoilType::Sandy => "Sandy",
        }
    }

    /// All soil classes
    pub fn all() -> &'static [SoilType] {
        &[
            SoilType::Alluvial,
            SoilType::Black,
            SoilType::Clayey,
            SoilType::Loamy,
            SoilType::Red,
            SoilType::Sandy,
        ]
    }
}

impl FromStr for SoilType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        SoilType::from_label(s).ok_or_else(|| AdvisorError::InvalidLabel {
            kind: "soil",
            label: s.to_string(),
        })
    }
}

/// Growing season classes recognized by the requirement profiles
///
/// Union of the Indian cropping calendar terms (Kharif/Rabi/Zaid) and the
/// broader season labels the profile tables use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
    Summer,
    Winter,
    Monsoon,
    #[serde(rename = "Whole Year")]
    WholeYear,
}

impl Season {
    /// Parse a season label (case-insensitive, surrounding whitespace ignored)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" => Some(Season::Zaid),
            "summer" => Some(Season::Summer),
            "winter" => Some(Season::Winter),
            "monsoon" => Some(Season::Monsoon),
            "whole year" => Some(Season::WholeYear),
            _ => None,
        }
    }

    /// Canonical label for display
    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
            Season::Summer => "Summer",
            Season::Winter => "Winter",
            Season::Monsoon => "Monsoon",
            Season::WholeYear => "Whole Year",
        }
    }

    /// All season classes
    pub fn all() -> &'static [Season] {
        &[
            Season::Kharif,
            Season::Rabi,
            Season::Zaid,
            Season::Summer,
            Season::Winter,
            Season::Monsoon,
            Season::WholeYear,
        ]
    }
}

impl FromStr for Season {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        Season::from_label(s).ok_or_else(|| AdvisorError::InvalidLabel {
            kind: "season",
            label: s.to_string(),
        })
    }
}

/// One field's agronomic and weather conditions, as submitted per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputVector {
    // Soil nutrients (kg/ha)
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,

    // Local climate
    pub temperature: f64, // °C, sub-zero allowed
    pub humidity: f64,    // %
    pub rainfall: f64,    // annual mm

    // Soil chemistry and categoricals
    pub ph: f64,
    pub soil: SoilType,
    pub season: Season,

    /// Free-form region name, used for log context only; may be empty
    pub region: String,
}

impl InputVector {
    /// Check every numeric field is finite and inside its domain.
    ///
    /// Temperature is the only field allowed to be negative. Fails with
    /// `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, f64, f64, f64); 7] = [
            ("nitrogen", self.nitrogen, 0.0, f64::INFINITY),
            ("phosphorus", self.phosphorus, 0.0, f64::INFINITY),
            ("potassium", self.potassium, 0.0, f64::INFINITY),
            ("temperature", self.temperature, f64::NEG_INFINITY, f64::INFINITY),
            ("humidity", self.humidity, 0.0, 100.0),
            ("rainfall", self.rainfall, 0.0, f64::INFINITY),
            ("ph", self.ph, 0.0, 14.0),
        ];

        for (field, value, lower, upper) in checks {
            if !value.is_finite() || value < lower || value > upper {
                return Err(AdvisorError::InvalidInput { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> InputVector {
        InputVector {
            nitrogen: 90.0,
            phosphorus: 45.0,
            potassium: 50.0,
            temperature: 26.0,
            humidity: 80.0,
            rainfall: 1100.0,
            ph: 6.2,
            soil: SoilType::Clayey,
            season: Season::Kharif,
            region: "East".to_string(),
        }
    }

    #[test]
    fn test_soil_labels_round_trip() {
        for soil in SoilType::all() {
            assert_eq!(SoilType::from_label(soil.label()), Some(*soil));
        }
        assert_eq!(SoilType::all().len(), 6);
    }

    #[test]
    fn test_soil_parse_lenient() {
        assert_eq!(SoilType::from_label("loamy"), Some(SoilType::Loamy));
        assert_eq!(SoilType::from_label(" BLACK "), Some(SoilType::Black));
        assert_eq!(SoilType::from_label("volcanic"), None);
    }

    #[test]
    fn test_season_labels_round_trip() {
        for season in Season::all() {
            assert_eq!(Season::from_label(season.label()), Some(*season));
        }
        assert_eq!(Season::all().len(), 7);
    }

    #[test]
    fn test_season_parse_lenient() {
        assert_eq!(Season::from_label("kharif"), Some(Season::Kharif));
        assert_eq!(Season::from_label("whole year"), Some(Season::WholeYear));
        assert_eq!(Season::from_label("Whole Year"), Some(Season::WholeYear));
        assert_eq!(Season::from_label("autumn"), None);
    }

    #[test]
    fn test_from_str_reports_label() {
        let err = "peaty".parse::<SoilType>().unwrap_err();
        assert_eq!(
            err,
            AdvisorError::InvalidLabel {
                kind: "soil",
                label: "peaty".to_string()
            }
        );
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_sub_zero_temperature() {
        let mut input = sample_input();
        input.temperature = -5.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut input = sample_input();
        input.nitrogen = f64::NAN;
        match input.validate().unwrap_err() {
            AdvisorError::InvalidInput { field, value } => {
                assert_eq!(field, "nitrogen");
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let mut input = sample_input();
        input.temperature = f64::INFINITY;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_domain() {
        let mut input = sample_input();
        input.humidity = 150.0;
        assert!(input.validate().is_err());

        let mut input = sample_input();
        input.ph = 20.0;
        assert!(input.validate().is_err());

        let mut input = sample_input();
        input.rainfall = -10.0;
        assert!(input.validate().is_err());
    }
}
