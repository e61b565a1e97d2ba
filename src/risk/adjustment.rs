//! Risk-Adjusted Ranking
//!
//! Shifts suitability confidences by fixed bonuses and penalties once
//! drought or flood risk crosses its threshold, then re-ranks. The shift is
//! always computed from the original confidence, so re-running with the
//! same inputs reproduces the same output; when a crop is hit by both the
//! drought and the flood rule, the flood rule's adjustment wins.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::risk::estimator::RiskScores;
use crate::scorer::CropScore;

/// A scored crop with its risk-shifted confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAdjustedCrop {
    pub crop: String,
    /// Confidence before adjustment, preserved for display
    pub confidence: f64,
    pub risk_adjusted_confidence: f64,
}

// ============================================================================
// ADJUSTMENT RULES
// ============================================================================

const DROUGHT_RISK_THRESHOLD: f64 = 60.0;
const FLOOD_RISK_THRESHOLD: f64 = 70.0;

// Crop classes, matched by name regardless of case
const DROUGHT_TOLERANT: &[&str] = &["millets", "pulses", "maize"];
const WATER_INTENSIVE: &[&str] = &["rice", "cotton"];
const FLOOD_TOLERANT: &[&str] = &["rice"];
const FLOOD_SENSITIVE: &[&str] = &["pulses", "maize"];

const DROUGHT_TOLERANT_BONUS: f64 = 15.0;
const WATER_INTENSIVE_PENALTY: f64 = -20.0;
const FLOOD_TOLERANT_BONUS: f64 = 20.0;
const FLOOD_SENSITIVE_PENALTY: f64 = -25.0;

fn in_class(name: &str, class: &[&str]) -> bool {
    class.iter().any(|c| name.eq_ignore_ascii_case(c))
}

/// Confidence shift for one crop under the given risk scores.
///
/// Each rule assigns rather than accumulates, so the later flood rule
/// overwrites the drought rule for crops matching both.
fn adjustment_for(crop: &str, risk: &RiskScores) -> f64 {
    let mut adjustment = 0.0;

    if risk.drought_risk > DROUGHT_RISK_THRESHOLD {
        if in_class(crop, DROUGHT_TOLERANT) {
            adjustment = DROUGHT_TOLERANT_BONUS;
        } else if in_class(crop, WATER_INTENSIVE) {
            adjustment = WATER_INTENSIVE_PENALTY;
        }
    }

    if risk.flood_risk > FLOOD_RISK_THRESHOLD {
        if in_class(crop, FLOOD_TOLERANT) {
            adjustment = FLOOD_TOLERANT_BONUS;
        } else if in_class(crop, FLOOD_SENSITIVE) {
            adjustment = FLOOD_SENSITIVE_PENALTY;
        }
    }

    adjustment
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Re-rank scored crops under the given risk scores.
///
/// Output is sorted descending by adjusted confidence; equal values keep
/// the incoming order. The original confidence is carried through
/// unmodified next to the adjusted one.
pub fn apply_risk_adjustment(scores: &[CropScore], risk: &RiskScores) -> Vec<RiskAdjustedCrop> {
    let mut adjusted: Vec<RiskAdjustedCrop> = scores
        .iter()
        .map(|score| RiskAdjustedCrop {
            crop: score.crop.clone(),
            confidence: score.confidence,
            risk_adjusted_confidence: clamp_confidence(
                score.confidence + adjustment_for(&score.crop, risk),
            ),
        })
        .collect();

    // Stable sort: ties keep the pre-adjustment order
    adjusted.sort_by(|a, b| {
        b.risk_adjusted_confidence
            .partial_cmp(&a.risk_adjusted_confidence)
            .unwrap_or(Ordering::Equal)
    });

    adjusted
}
