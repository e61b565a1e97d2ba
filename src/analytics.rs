//! Prediction History Analytics
//!
//! Pure summary statistics over recorded recommendations, matching the
//! dashboard a caller renders from them: total recommendation count,
//! average top confidence, the latest request's risk level, and a
//! deterministic crop frequency ranking.
//!
//! History slices are ordered oldest first, most recent last.

use crate::advisor::Recommendation;
use crate::risk::RiskLevel;
use crate::scorer::CropScore;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One recorded recommendation: crop/confidence pairs in display order
/// plus the risk scores captured for the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub crops: Vec<CropScore>,
    pub drought_risk: f64,
    pub flood_risk: f64,
}

impl PredictionRecord {
    /// Snapshot a recommendation for the history log. Confidences are
    /// recorded as displayed, after risk adjustment.
    pub fn from_recommendation(recommendation: &Recommendation) -> Self {
        Self {
            crops: recommendation
                .crops
                .iter()
                .map(|crop| CropScore {
                    crop: crop.crop.clone(),
                    confidence: crop.risk_adjusted_confidence,
                })
                .collect(),
            drought_risk: recommendation.risk.drought_risk,
            flood_risk: recommendation.risk.flood_risk,
        }
    }
}

/// Headline dashboard statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Count of recommended crop names across all records.
    pub total_recommendations: usize,
    /// Average of each record's top confidence, rounded to a whole number.
    pub average_top_confidence: f64,
    /// Risk level of the most recent record; `None` with no history.
    pub latest_risk_level: Option<RiskLevel>,
}

/// Summarize a prediction history for dashboard display.
///
/// An empty history yields a zeroed summary with no risk level rather
/// than an error.
pub fn summarize(history: &[PredictionRecord]) -> DashboardSummary {
    let latest_risk_level = history
        .last()
        .map(|record| RiskLevel::from_score(record.drought_risk.max(record.flood_risk)));

    let total_recommendations = history
        .iter()
        .map(|record| record.crops.iter().filter(|c| !c.crop.is_empty()).count())
        .sum();

    let average_top_confidence = if history.is_empty() {
        0.0
    } else {
        let top_sum: f64 = history
            .iter()
            .map(|record| record.crops.first().map_or(0.0, |c| c.confidence))
            .sum();
        (top_sum / history.len() as f64).round()
    };

    DashboardSummary {
        total_recommendations,
        average_top_confidence,
        latest_risk_level,
    }
}

/// Rank recommended crop names by how often they appear in the history.
///
/// Ordering is deterministic: count descending, then name ascending.
pub fn crop_frequency(history: &[PredictionRecord]) -> Vec<(String, usize)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for record in history {
        for crop in &record.crops {
            if crop.crop.is_empty() {
                continue;
            }
            *counts.entry(crop.crop.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranking: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking
}

// ============================================================================
// TESTS
// ============================================================================
