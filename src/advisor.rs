//! Crop Advisor - Main coordinator for producing recommendations
//!
//! Composes the scoring, classifier reduction, climate risk, and husbandry
//! detail stages into a single pipeline: rank candidate crops, estimate
//! drought/flood risk for the request, re-rank under that risk, and attach
//! guidance for display.
//!
//! The classifier path is preferred when a probability vector is supplied;
//! a malformed vector downgrades to the rule-based path instead of failing
//! the whole request.

use crate::catalog::CropCatalog;
use crate::classifier::ClassifierOutput;
use crate::details::{details_or_placeholder, CropDetails};
use crate::error::{AdvisorError, Result};
use crate::input::InputVector;
use crate::risk::{
    apply_risk_adjustment, estimate_climate_risk, RiskLevel, RiskScores, WeatherSample,
};
use crate::scorer::{score_rule_based, CropScore};
use serde::Serialize;

/// Number of crops surfaced per recommendation.
pub const DEFAULT_TOP_K: usize = 3;

/// A recommended crop with risk-adjusted confidence and husbandry guidance.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedCrop {
    pub crop: String,
    /// Confidence from the classifier or rule scorer, 0-100.
    pub confidence: f64,
    /// Confidence after drought/flood adjustment, 0-100.
    pub risk_adjusted_confidence: f64,
    pub details: CropDetails,
}

/// Full advisory result for one request.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Top crops, ordered by risk-adjusted confidence descending.
    pub crops: Vec<RecommendedCrop>,
    pub risk: RiskScores,
    pub risk_level: RiskLevel,
}

/// Main recommendation coordinator.
pub struct CropAdvisor {
    catalog: CropCatalog,
}

impl CropAdvisor {
    /// Create an advisor over the bundled eight-crop catalog.
    pub fn new() -> Self {
        Self {
            catalog: CropCatalog::bundled(),
        }
    }

    /// Create an advisor over a caller-supplied catalog.
    pub fn with_catalog(catalog: CropCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this advisor ranks against.
    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Produce a risk-adjusted recommendation for one input.
    ///
    /// # Arguments
    /// * `input` - Validated agronomic measurements for the plot
    /// * `classifier` - Optional probability vector from an upstream model
    /// * `live_weather` - Optional current conditions for the region
    ///
    /// # Returns
    /// Top crops (at most [`DEFAULT_TOP_K`]) ordered by risk-adjusted
    /// confidence, with the risk scores and banded risk level used to
    /// produce them.
    pub fn recommend(
        &self,
        input: &InputVector,
        classifier: Option<&ClassifierOutput>,
        live_weather: Option<WeatherSample>,
    ) -> Result<Recommendation> {
        input.validate()?;

        // Rank candidates: classifier when present and well-formed,
        // rule-based otherwise
        let mut ranked = self.candidate_scores(input, classifier)?;
        ranked.truncate(DEFAULT_TOP_K);

        // Climate risk for the request region and history
        let risk = estimate_climate_risk(&input.region, input.rainfall, input.temperature, live_weather);
        let risk_level = RiskLevel::from_risks(&risk);

        // Re-rank under risk and attach husbandry guidance
        let crops = apply_risk_adjustment(&ranked, &risk)
            .into_iter()
            .map(|adjusted| RecommendedCrop {
                details: *details_or_placeholder(&adjusted.crop),
                crop: adjusted.crop,
                confidence: adjusted.confidence,
                risk_adjusted_confidence: adjusted.risk_adjusted_confidence,
            })
            .collect();

        Ok(Recommendation {
            crops,
            risk,
            risk_level,
        })
    }

    fn candidate_scores(
        &self,
        input: &InputVector,
        classifier: Option<&ClassifierOutput>,
    ) -> Result<Vec<CropScore>> {
        match classifier {
            Some(output) => match output.reduce(DEFAULT_TOP_K) {
                Ok(scores) => {
                    tracing::debug!("Ranked {} crops from classifier output", scores.len());
                    Ok(scores)
                }
                Err(AdvisorError::InvalidDistribution { reason }) => {
                    tracing::warn!(
                        "Classifier output rejected ({}), falling back to rule-based scoring",
                        reason
                    );
                    score_rule_based(input, &self.catalog)
                }
                Err(e) => Err(e),
            },
            None => score_rule_based(input, &self.catalog),
        }
    }
}

impl Default for CropAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Season, SoilType};
    use approx::assert_relative_eq;

    fn paddy_input() -> InputVector {
        InputVector {
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 50.0,
            temperature: 25.0,
            humidity: 85.0,
            rainfall: 1200.0,
            ph: 6.2,
            soil: SoilType::Clayey,
            season: Season::Kharif,
            region: "East".to_string(),
        }
    }

    fn classifier_output(pairs: &[(&str, f64)]) -> ClassifierOutput {
        ClassifierOutput {
            labels: pairs.iter().map(|(name, _)| name.to_string()).collect(),
            probabilities: pairs.iter().map(|(_, p)| *p).collect(),
        }
    }

    #[test]
    fn test_rule_based_path_ranks_and_enriches() {
        let advisor = CropAdvisor::new();
        let rec = advisor.recommend(&paddy_input(), None, None).unwrap();

        assert_eq!(rec.crops.len(), DEFAULT_TOP_K);
        assert_eq!(rec.crops[0].crop, "Rice");
        assert_relative_eq!(rec.crops[0].confidence, 100.0);
        assert_eq!(rec.crops[0].details.planting_window, "June-July");

        // No live sample: humidity falls back to 50, temperature to history.
        // drought = 0*2 + 50*0.5 = 25; flood = 1200/50 + 15 = 39.
        assert_relative_eq!(rec.risk.drought_risk, 25.0);
        assert_relative_eq!(rec.risk.flood_risk, 39.0);
        assert_eq!(rec.risk_level, RiskLevel::Moderate);

        // Neither threshold crossed, so adjusted == original.
        for crop in &rec.crops {
            assert_relative_eq!(crop.risk_adjusted_confidence, crop.confidence);
        }
    }

    #[test]
    fn test_classifier_path_overrides_rule_scoring() {
        let advisor = CropAdvisor::new();
        let output = classifier_output(&[("Rice", 0.1), ("Wheat", 0.7), ("Maize", 0.2)]);
        let rec = advisor.recommend(&paddy_input(), Some(&output), None).unwrap();

        let names: Vec<&str> = rec.crops.iter().map(|c| c.crop.as_str()).collect();
        assert_eq!(names, ["Wheat", "Maize", "Rice"]);
        assert_relative_eq!(rec.crops[0].confidence, 70.0);
        assert_relative_eq!(rec.crops[1].confidence, 20.0);
        assert_relative_eq!(rec.crops[2].confidence, 10.0);
    }

    #[test]
    fn test_malformed_classifier_falls_back_to_rules() {
        let advisor = CropAdvisor::new();
        let output = classifier_output(&[("Rice", 0.5), ("Wheat", f64::NAN), ("Maize", 0.2)]);
        let rec = advisor.recommend(&paddy_input(), Some(&output), None).unwrap();

        // Rule-based ranking, not the classifier labels in classifier order.
        assert_eq!(rec.crops[0].crop, "Rice");
        assert_relative_eq!(rec.crops[0].confidence, 100.0);
        assert_eq!(rec.crops.len(), DEFAULT_TOP_K);
    }

    #[test]
    fn test_drought_adjustment_reranks_output() {
        let advisor = CropAdvisor::new();
        let output = classifier_output(&[("Rice", 0.8), ("Millets", 0.6), ("Wheat", 0.4)]);

        // History: hot and dry. temp 35, humidity fallback 50, rainfall 300.
        // drought = 10*2 + 50*0.5 + 20 = 65; flood = 300/50 + 15 = 21.
        let mut input = paddy_input();
        input.temperature = 35.0;
        input.rainfall = 300.0;

        let rec = advisor.recommend(&input, Some(&output), None).unwrap();
        assert_relative_eq!(rec.risk.drought_risk, 65.0);
        assert_relative_eq!(rec.risk.flood_risk, 21.0);

        let names: Vec<&str> = rec.crops.iter().map(|c| c.crop.as_str()).collect();
        assert_eq!(names, ["Millets", "Rice", "Wheat"]);
        assert_relative_eq!(rec.crops[0].confidence, 60.0);
        assert_relative_eq!(rec.crops[0].risk_adjusted_confidence, 75.0);
        assert_relative_eq!(rec.crops[1].confidence, 80.0);
        assert_relative_eq!(rec.crops[1].risk_adjusted_confidence, 60.0);
        assert_eq!(rec.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_live_weather_feeds_risk_estimate() {
        let advisor = CropAdvisor::new();
        let mut input = paddy_input();
        input.rainfall = 300.0;

        let live = WeatherSample {
            temperature: 35.0,
            humidity: 80.0,
        };
        let rec = advisor.recommend(&input, None, Some(live)).unwrap();

        // drought = 10*2 + 20*0.5 + 20 = 50; flood = 6 + 24 = 30.
        assert_relative_eq!(rec.risk.drought_risk, 50.0);
        assert_relative_eq!(rec.risk.flood_risk, 30.0);
        assert_relative_eq!(rec.risk.current_temperature, 35.0);
        assert_relative_eq!(rec.risk.current_humidity, 80.0);
    }

    #[test]
    fn test_unknown_label_gets_placeholder_details() {
        let advisor = CropAdvisor::new();
        let output = classifier_output(&[("Dragonfruit", 0.7), ("Rice", 0.2), ("Wheat", 0.1)]);
        let rec = advisor.recommend(&paddy_input(), Some(&output), None).unwrap();

        assert_eq!(rec.crops[0].crop, "Dragonfruit");
        assert_eq!(rec.crops[0].details.planting_window, "N/A");
        assert_eq!(rec.crops[1].details.planting_window, "June-July");
    }

    #[test]
    fn test_invalid_input_rejected_before_scoring() {
        let advisor = CropAdvisor::new();
        let mut input = paddy_input();
        input.ph = f64::NAN;

        let err = advisor.recommend(&input, None, None).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput { field: "ph", .. }));
    }

    #[test]
    fn test_small_catalog_yields_fewer_crops() {
        let profiles = CropCatalog::bundled().profiles()[..2].to_vec();
        let catalog = CropCatalog::from_profiles(profiles).unwrap();
        let advisor = CropAdvisor::with_catalog(catalog);

        let rec = advisor.recommend(&paddy_input(), None, None).unwrap();
        assert_eq!(rec.crops.len(), 2);
    }

    #[test]
    fn test_default_uses_bundled_catalog() {
        let advisor = CropAdvisor::default();
        assert_eq!(advisor.catalog().len(), 8);
    }
}
