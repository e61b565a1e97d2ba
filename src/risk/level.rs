//! Risk Level Banding
//!
//! Qualitative banding of 0-100 risk scores for dashboards and summaries.
//! A request's overall band is driven by whichever of its drought and flood
//! scores is higher.

use serde::{Deserialize, Serialize};

use crate::risk::estimator::RiskScores;

/// Qualitative climate risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Band a 0-100 risk score: below 30 low, below 70 moderate, else high
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            RiskLevel::Low
        } else if score < 70.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    /// Band the dominant of the drought and flood scores
    pub fn from_risks(risk: &RiskScores) -> Self {
        Self::from_score(risk.drought_risk.max(risk.flood_risk))
    }

    /// Display text for summaries
    pub fn display_text(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
        }
    }
}
