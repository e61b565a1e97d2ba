//! Rule-Based Suitability Scorer
//!
//! Scores every cataloged crop against one field's conditions using additive
//! points per satisfied requirement, with partial credit for near misses on
//! temperature, rainfall, and pH. Used as the recommendation path whenever no
//! trained classifier output is available.
//!
//! Scoring is a pure function of the input vector and the catalog: equal
//! inputs produce identical rankings, and equal scores keep catalog order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::catalog::{CropCatalog, RequirementProfile};
use crate::error::Result;
use crate::input::InputVector;

/// A crop with its suitability confidence (0-100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropScore {
    pub crop: String,
    pub confidence: f64,
}

// ============================================================================
// POINT ALLOCATION (totals 100)
// ============================================================================

const NITROGEN_POINTS: f64 = 15.0;
const PHOSPHORUS_POINTS: f64 = 12.0;
const POTASSIUM_POINTS: f64 = 13.0;
const TEMPERATURE_POINTS: f64 = 20.0;
const RAINFALL_POINTS: f64 = 15.0;
const PH_POINTS: f64 = 10.0;
const SOIL_POINTS: f64 = 10.0;
const SEASON_POINTS: f64 = 5.0;

// Partial credit for near misses
const TEMPERATURE_NEAR_POINTS: f64 = 10.0;
const TEMPERATURE_NEAR_BAND: f64 = 5.0; // |t - midpoint| strictly below
const RAINFALL_NEAR_POINTS: f64 = 8.0;
const RAINFALL_NEAR_FACTOR: f64 = 0.7; // fraction of the crop's minimum
const PH_NEAR_POINTS: f64 = 5.0;
const PH_NEAR_BAND: f64 = 0.5; // |ph - midpoint| strictly below

/// Score one crop profile against the input conditions
fn score_profile(input: &InputVector, profile: &RequirementProfile) -> f64 {
    let mut score = 0.0;

    if profile.nitrogen.contains(input.nitrogen) {
        score += NITROGEN_POINTS;
    }
    if profile.phosphorus.contains(input.phosphorus) {
        score += PHOSPHORUS_POINTS;
    }
    if profile.potassium.contains(input.potassium) {
        score += POTASSIUM_POINTS;
    }

    if profile.temperature.contains(input.temperature) {
        score += TEMPERATURE_POINTS;
    } else if (input.temperature - profile.temperature.midpoint()).abs() < TEMPERATURE_NEAR_BAND {
        score += TEMPERATURE_NEAR_POINTS;
    }

    if input.rainfall >= profile.rainfall_min {
        score += RAINFALL_POINTS;
    } else if input.rainfall >= RAINFALL_NEAR_FACTOR * profile.rainfall_min {
        score += RAINFALL_NEAR_POINTS;
    }

    if profile.ph.contains(input.ph) {
        score += PH_POINTS;
    } else if (input.ph - profile.ph.midpoint()).abs() < PH_NEAR_BAND {
        score += PH_NEAR_POINTS;
    }

    if profile.soils.contains(&input.soil) {
        score += SOIL_POINTS;
    }
    if profile.seasons.contains(&input.season) {
        score += SEASON_POINTS;
    }

    score.clamp(0.0, 100.0)
}

/// Score every crop in the catalog, descending by confidence.
///
/// The input is validated first; ties keep the catalog's fixed crop order.
pub fn score_rule_based(input: &InputVector, catalog: &CropCatalog) -> Result<Vec<CropScore>> {
    input.validate()?;

    let mut scores: Vec<CropScore> = catalog
        .profiles()
        .iter()
        .map(|profile| CropScore {
            crop: profile.name.clone(),
            confidence: score_profile(input, profile),
        })
        .collect();

    // Stable sort: equal confidences keep catalog order
    scores.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal));

    Ok(scores)
}

/// Score a single named crop, surfacing `UnknownCrop` for absent names
pub fn score_crop(input: &InputVector, catalog: &CropCatalog, name: &str) -> Result<CropScore> {
    input.validate()?;
    let profile = catalog.require(name)?;
    Ok(CropScore {
        crop: profile.name.clone(),
        confidence: score_profile(input, profile),
    })
}

/// Score many independent input vectors in parallel.
///
/// Output order matches input order; each entry is identical to what the
/// sequential path returns for the same input.
pub fn score_rule_based_batch(
    inputs: &[InputVector],
    catalog: &CropCatalog,
) -> Result<Vec<Vec<CropScore>>> {
    inputs
        .par_iter()
        .map(|input| score_rule_based(input, catalog))
        .collect()
}
