//! Crop Requirement Catalog
//!
//! Static agronomic requirement profiles: tolerance ranges for soil
//! nutrients, temperature and pH, a minimum annual rainfall, and the
//! admissible soil/season classes per crop.
//!
//! The bundled catalog covers the eight staple field crops of the
//! rule-based recommendation path. An external catalog can be loaded from
//! JSON instead; profiles are validated once at load time and the catalog
//! is immutable afterwards. Catalog iteration order is fixed and doubles
//! as the tie-break order when crops score equally.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fs;
use std::path::Path;

use crate::error::AdvisorError;
use crate::input::{Season, SoilType};

/// A closed tolerance band [lower, upper]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceRange {
    pub lower: f64,
    pub upper: f64,
}

impl ToleranceRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn is_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower <= self.upper
    }
}

/// Agronomic requirements for a single crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementProfile {
    pub name: String,

    // Nutrient tolerance bands (kg/ha)
    pub nitrogen: ToleranceRange,
    pub phosphorus: ToleranceRange,
    pub potassium: ToleranceRange,

    // Climate and soil chemistry
    pub temperature: ToleranceRange, // °C
    pub ph: ToleranceRange,
    pub rainfall_min: f64, // annual mm

    // Admissible categorical classes
    pub soils: SmallVec<[SoilType; 4]>,
    pub seasons: SmallVec<[Season; 4]>,
}

// ============================================================================
// EMBEDDED DEFAULT CATALOG
// ============================================================================

fn bundled_profiles() -> Vec<RequirementProfile> {
    vec![
        RequirementProfile {
            name: "Rice".to_string(),
            nitrogen: ToleranceRange::new(80.0, 120.0),
            phosphorus: ToleranceRange::new(40.0, 60.0),
            potassium: ToleranceRange::new(40.0, 60.0),
            temperature: ToleranceRange::new(20.0, 35.0),
            ph: ToleranceRange::new(5.5, 7.0),
            rainfall_min: 1000.0,
            soils: smallvec![SoilType::Clayey, SoilType::Loamy],
            seasons: smallvec![Season::Kharif, Season::Monsoon],
        },
        RequirementProfile {
            name: "Wheat".to_string(),
            nitrogen: ToleranceRange::new(100.0, 140.0),
            phosphorus: ToleranceRange::new(40.0, 80.0),
            potassium: ToleranceRange::new(40.0, 80.0),
            temperature: ToleranceRange::new(15.0, 25.0),
            ph: ToleranceRange::new(6.0, 7.5),
            rainfall_min: 500.0,
            soils: smallvec![SoilType::Loamy, SoilType::Clayey],
            seasons: smallvec![Season::Rabi, Season::Winter],
        },
        RequirementProfile {
            name: "Maize".to_string(),
            nitrogen: ToleranceRange::new(60.0, 100.0),
            phosphorus: ToleranceRange::new(30.0, 60.0),
            potassium: ToleranceRange::new(30.0, 60.0),
            temperature: ToleranceRange::new(20.0, 30.0),
            ph: ToleranceRange::new(5.5, 7.5),
            rainfall_min: 600.0,
            soils: smallvec![SoilType::Loamy, SoilType::Sandy, SoilType::Black],
            seasons: smallvec![Season::Kharif, Season::Summer],
        },
        RequirementProfile {
            name: "Cotton".to_string(),
            nitrogen: ToleranceRange::new(80.0, 120.0),
            phosphorus: ToleranceRange::new(40.0, 80.0),
            potassium: ToleranceRange::new(40.0, 80.0),
            temperature: ToleranceRange::new(21.0, 35.0),
            ph: ToleranceRange::new(6.0, 8.0),
            rainfall_min: 600.0,
            soils: smallvec![SoilType::Black, SoilType::Alluvial],
            seasons: smallvec![Season::Kharif, Season::Summer],
        },
        RequirementProfile {
            name: "Millets".to_string(),
            nitrogen: ToleranceRange::new(40.0, 80.0),
            phosphorus: ToleranceRange::new(20.0, 40.0),
            potassium: ToleranceRange::new(20.0, 40.0),
            temperature: ToleranceRange::new(25.0, 35.0),
            ph: ToleranceRange::new(5.0, 7.5),
            rainfall_min: 300.0,
            soils: smallvec![SoilType::Sandy, SoilType::Red, SoilType::Loamy],
            seasons: smallvec![Season::Kharif, Season::Summer],
        },
        RequirementProfile {
            name: "Pulses".to_string(),
            nitrogen: ToleranceRange::new(20.0, 60.0),
            phosphorus: ToleranceRange::new(40.0, 80.0),
            potassium: ToleranceRange::new(20.0, 60.0),
            temperature: ToleranceRange::new(20.0, 30.0),
            ph: ToleranceRange::new(6.0, 7.5),
            rainfall_min: 400.0,
            soils: smallvec![SoilType::Loamy, SoilType::Black, SoilType::Red],
            seasons: smallvec![Season::Rabi, Season::Winter],
        },
        RequirementProfile {
            name: "Sugarcane".to_string(),
            nitrogen: ToleranceRange::new(80.0, 150.0),
            phosphorus: ToleranceRange::new(40.0, 80.0),
            potassium: ToleranceRange::new(80.0, 150.0),
            temperature: ToleranceRange::new(21.0, 35.0),
            ph: ToleranceRange::new(6.0, 7.5),
            rainfall_min: 1000.0,
            soils: smallvec![SoilType::Loamy, SoilType::Black],
            seasons: smallvec![Season::WholeYear, Season::Monsoon],
        },
        RequirementProfile {
            name: "Jute".to_string(),
            nitrogen: ToleranceRange::new(60.0, 100.0),
            phosphorus: ToleranceRange::new(30.0, 60.0),
            potassium: ToleranceRange::new(30.0, 60.0),
            temperature: ToleranceRange::new(24.0, 35.0),
            ph: ToleranceRange::new(6.0, 7.5),
            rainfall_min: 1200.0,
            soils: smallvec![SoilType::Alluvial, SoilType::Clayey],
            seasons: smallvec![Season::Kharif, Season::Monsoon],
        },
    ]
}

// ============================================================================
// CATALOG
// ============================================================================

/// Immutable crop requirement catalog with a fixed iteration order
#[derive(Debug, Clone)]
pub struct CropCatalog {
    profiles: Vec<RequirementProfile>,
    // Lowercased name -> position in `profiles`
    index: FxHashMap<String, usize>,
}

impl CropCatalog {
    /// The built-in eight-crop catalog
    pub fn bundled() -> Self {
        let profiles = bundled_profiles();
        let index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.to_ascii_lowercase(), i))
            .collect();
        Self { profiles, index }
    }

    /// Build a catalog from already-parsed profiles, validating each one
    pub fn from_profiles(profiles: Vec<RequirementProfile>) -> Result<Self> {
        anyhow::ensure!(!profiles.is_empty(), "crop catalog is empty");

        let mut index = FxHashMap::default();
        for (i, profile) in profiles.iter().enumerate() {
            anyhow::ensure!(!profile.name.trim().is_empty(), "profile {} has an empty name", i);

            let ranges = [
                ("nitrogen", profile.nitrogen),
                ("phosphorus", profile.phosphorus),
                ("potassium", profile.potassium),
                ("temperature", profile.temperature),
                ("ph", profile.ph),
            ];
            for (label, range) in ranges {
                anyhow::ensure!(
                    range.is_valid(),
                    "crop '{}': invalid {} range ({} .. {})",
                    profile.name,
                    label,
                    range.lower,
                    range.upper
                );
            }
            anyhow::ensure!(
                profile.rainfall_min.is_finite() && profile.rainfall_min >= 0.0,
                "crop '{}': invalid rainfall minimum {}",
                profile.name,
                profile.rainfall_min
            );

            if index.insert(profile.name.trim().to_ascii_lowercase(), i).is_some() {
                anyhow::bail!("duplicate crop name '{}' in catalog", profile.name);
            }
        }

        Ok(Self { profiles, index })
    }

    /// Load an external catalog from a JSON array of profiles
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crop catalog file: {:?}", path))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to load crop catalog from {:?}", path))
    }

    /// Parse a catalog from a JSON array of profiles
    pub fn from_json(json: &str) -> Result<Self> {
        let profiles: Vec<RequirementProfile> =
            serde_json::from_str(json).with_context(|| "Failed to parse crop catalog JSON")?;
        let catalog = Self::from_profiles(profiles)?;
        tracing::debug!("Parsed crop catalog with {} profiles", catalog.len());
        Ok(catalog)
    }

    /// Look up a profile by crop name (case-insensitive); None when absent
    pub fn get(&self, name: &str) -> Option<&RequirementProfile> {
        self.index
            .get(&name.trim().to_ascii_lowercase())
            .map(|&i| &self.profiles[i])
    }

    /// Look up a profile, surfacing an error for uncataloged crops
    pub fn require(&self, name: &str) -> std::result::Result<&RequirementProfile, AdvisorError> {
        self.get(name).ok_or_else(|| AdvisorError::UnknownCrop {
            name: name.to_string(),
        })
    }

    /// Crop names in catalog order
    pub fn all_crops(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    /// Profiles in catalog order
    pub fn profiles(&self) -> &[RequirementProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for CropCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}
