//! Classifier Result Reducer
//!
//! Reduces an external classifier's probability vector over a fixed crop
//! label set to the top-K scored crops. Model training and inference live
//! outside this crate; only the probability output crosses this boundary,
//! so it is validated structurally before any ranking happens.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{AdvisorError, Result};
use crate::scorer::CropScore;

/// Probability output of an external crop classifier
///
/// `labels[i]` is the crop name for `probabilities[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierOutput {
    pub labels: Vec<String>,
    pub probabilities: Vec<f64>,
}

impl ClassifierOutput {
    /// Reduce to the top-K crops by probability
    pub fn reduce(&self, top_k: usize) -> Result<Vec<CropScore>> {
        reduce_classifier_output(&self.probabilities, &self.labels, top_k)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Select the top-K classes by probability, descending.
///
/// Equal probabilities keep ascending class-index order. Confidence is the
/// probability expressed as a percentage, rounded to two decimal places.
/// The distribution is rejected (`InvalidDistribution`) when it is empty,
/// does not match the label set's length, or contains non-finite or
/// negative values; probabilities are otherwise taken as-is, without
/// renormalization.
pub fn reduce_classifier_output(
    probabilities: &[f64],
    labels: &[String],
    top_k: usize,
) -> Result<Vec<CropScore>> {
    if probabilities.is_empty() {
        return Err(AdvisorError::InvalidDistribution {
            reason: "empty probability vector".to_string(),
        });
    }
    if probabilities.len() != labels.len() {
        return Err(AdvisorError::InvalidDistribution {
            reason: format!(
                "length {} does not match {} labels",
                probabilities.len(),
                labels.len()
            ),
        });
    }
    for (i, &p) in probabilities.iter().enumerate() {
        if !p.is_finite() {
            return Err(AdvisorError::InvalidDistribution {
                reason: format!("non-finite probability at index {}", i),
            });
        }
        if p < 0.0 {
            return Err(AdvisorError::InvalidDistribution {
                reason: format!("negative probability at index {}", i),
            });
        }
    }

    let mut indices: Vec<usize> = (0..probabilities.len()).collect();
    // Stable sort: equal probabilities keep ascending class index
    indices.sort_by(|&a, &b| {
        probabilities[b]
            .partial_cmp(&probabilities[a])
            .unwrap_or(Ordering::Equal)
    });

    Ok(indices
        .into_iter()
        .take(top_k)
        .map(|i| CropScore {
            crop: labels[i].clone(),
            confidence: round2(probabilities[i] * 100.0),
        })
        .collect())
}
