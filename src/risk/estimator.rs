//! Climate Risk Estimator
//!
//! Heuristic drought and flood risk scores from historical rainfall and
//! temperature, sharpened by a live weather reading when one is available.
//! Missing live data is a normal state, not an error: the estimate falls
//! back to the historical temperature and a neutral humidity.

use serde::{Deserialize, Serialize};

/// One live weather reading from an external provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature: f64, // °C
    pub humidity: f64,    // %
}

impl WeatherSample {
    /// A reading with any non-finite field is discarded as a whole
    pub fn is_usable(&self) -> bool {
        self.temperature.is_finite() && self.humidity.is_finite()
    }
}

/// Drought and flood risk for one request, plus the weather actually used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    /// 0-100, whole numbers
    pub drought_risk: f64,
    /// 0-100, whole numbers
    pub flood_risk: f64,
    /// Temperature the estimate used (live when available, else historical)
    pub current_temperature: f64,
    /// Humidity the estimate used (live when available, else the fallback)
    pub current_humidity: f64,
}

impl RiskScores {
    /// Conservative placeholder scores for when no climate inputs are
    /// available upstream at all; echoes the request's own readings.
    pub fn safe_default(temperature: f64, humidity: f64) -> Self {
        Self {
            drought_risk: SAFE_DEFAULT_RISK,
            flood_risk: SAFE_DEFAULT_RISK,
            current_temperature: temperature,
            current_humidity: humidity,
        }
    }
}

// ============================================================================
// ESTIMATION CONSTANTS
// ============================================================================

/// Humidity assumed when no live reading is available (%)
const FALLBACK_HUMIDITY: f64 = 50.0;

/// Annual rainfall below this adds a fixed drought bump (mm)
const LOW_RAINFALL_THRESHOLD: f64 = 500.0;
const LOW_RAINFALL_DROUGHT_BUMP: f64 = 20.0;

/// Temperature above this pivot drives drought risk (°C)
const DROUGHT_TEMPERATURE_PIVOT: f64 = 25.0;

/// Placeholder scores used by `RiskScores::safe_default`
const SAFE_DEFAULT_RISK: f64 = 20.0;

// Neutral stand-ins for non-finite historical figures: the pivot
// temperature contributes no drought, the threshold rainfall no bump
const NEUTRAL_TEMPERATURE: f64 = DROUGHT_TEMPERATURE_PIVOT;
const NEUTRAL_RAINFALL: f64 = LOW_RAINFALL_THRESHOLD;

fn round_clamp(score: f64) -> f64 {
    score.round().clamp(0.0, 100.0)
}

/// Estimate drought and flood risk for one location.
///
/// Drought grows with heat above the pivot and with dryness of the air,
/// plus a fixed bump for low-rainfall regions. Flood grows with annual
/// rainfall and humidity. Both scores are rounded to whole numbers and
/// clamped to [0, 100]. Never fails: unusable inputs degrade to neutral
/// fallbacks instead.
///
/// `location` is free-form context for logging; it may be empty.
pub fn estimate_climate_risk(
    location: &str,
    hist_rainfall: f64,
    hist_temperature: f64,
    live: Option<WeatherSample>,
) -> RiskScores {
    let live = match live {
        Some(sample) if sample.is_usable() => Some(sample),
        Some(sample) => {
            tracing::warn!(
                "Discarding non-finite live weather ({:?}) for '{}'",
                sample,
                location
            );
            None
        }
        None => {
            tracing::debug!("No live weather for '{}'; using historical fallback", location);
            None
        }
    };

    let hist_temperature = if hist_temperature.is_finite() {
        hist_temperature
    } else {
        NEUTRAL_TEMPERATURE
    };
    let hist_rainfall = if hist_rainfall.is_finite() {
        hist_rainfall
    } else {
        NEUTRAL_RAINFALL
    };

    let temperature = live.map_or(hist_temperature, |s| s.temperature);
    let humidity = live.map_or(FALLBACK_HUMIDITY, |s| s.humidity);

    let mut drought = (temperature - DROUGHT_TEMPERATURE_PIVOT).max(0.0) * 2.0
        + (100.0 - humidity).max(0.0) * 0.5;
    if hist_rainfall < LOW_RAINFALL_THRESHOLD {
        drought += LOW_RAINFALL_DROUGHT_BUMP;
    }

    let flood = hist_rainfall / 50.0 + humidity * 0.3;

    RiskScores {
        drought_risk: round_clamp(drought),
        flood_risk: round_clamp(flood),
        current_temperature: temperature,
        current_humidity: humidity,
    }
}
