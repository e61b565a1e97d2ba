//! Climate Risk Scoring and Risk-Aware Ranking
//!
//! Turns weather signals into drought/flood scores and feeds them back into
//! the recommendation ranking. Risk never blocks a recommendation: it shifts
//! confidences once a threshold is crossed and bands the overall exposure
//! for display.
//!
//! ## Architecture
//! - `estimator.rs` - drought/flood scores from historical + live weather
//! - `adjustment.rs` - confidence bonuses/penalties per crop class
//! - `level.rs` - qualitative LOW/MODERATE/HIGH banding

pub mod adjustment;
pub mod estimator;
pub mod level;

// Re-export public API
pub use adjustment::{apply_risk_adjustment, RiskAdjustedCrop};
pub use estimator::{estimate_climate_risk, RiskScores, WeatherSample};
pub use level::RiskLevel;
