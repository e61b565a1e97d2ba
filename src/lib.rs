//! Crop Advisor Rust Implementation
//!
//! Crop suitability scoring and climate risk adjustment for agronomic
//! recommendation services.
//!
//! - `input`: Validated request types and categorical label parsing
//! - `catalog`: Crop requirement profiles (embedded defaults, JSON loading)
//! - `scorer`: Rule-based suitability scoring against the catalog
//! - `classifier`: Reduction of upstream model probability vectors
//! - `risk/`: Drought/flood estimation, ranking adjustment, level banding
//! - `details`: Embedded husbandry guidance table
//! - `advisor`: End-to-end recommendation pipeline
//! - `analytics`: Summary statistics over recorded recommendations

pub mod error;
pub mod input;
pub mod catalog;
pub mod scorer;
pub mod classifier;
pub mod risk;
pub mod details;
pub mod advisor;
pub mod analytics;

// Re-export commonly used types
pub use advisor::{CropAdvisor, Recommendation, RecommendedCrop, DEFAULT_TOP_K};
pub use analytics::{crop_frequency, summarize, DashboardSummary, PredictionRecord};
pub use catalog::{CropCatalog, RequirementProfile, ToleranceRange};
pub use classifier::{reduce_classifier_output, ClassifierOutput};
pub use details::{details_or_placeholder, get_crop_details, CropDetails};
pub use error::{AdvisorError, Result};
pub use input::{InputVector, Season, SoilType};
pub use risk::{
    apply_risk_adjustment, estimate_climate_risk, RiskAdjustedCrop, RiskLevel, RiskScores,
    WeatherSample,
};
pub use scorer::{score_crop, score_rule_based, score_rule_based_batch, CropScore};

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
