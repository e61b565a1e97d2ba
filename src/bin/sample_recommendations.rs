//! Sample Recommendation Runs
//!
//! Exercises the full advisory pipeline for a handful of representative
//! field scenarios, printing ranked crops, risk scores, and husbandry
//! guidance for each, then the dashboard summary over the run history.
//!
//! Run with: cargo run --bin sample_recommendations

use crop_advisor_rust::analytics;
use crop_advisor_rust::{
    ClassifierOutput, CropAdvisor, InputVector, PredictionRecord, Season, SoilType, WeatherSample,
};

/// Representative field scenarios
fn scenarios() -> Vec<(
    &'static str,
    InputVector,
    Option<WeatherSample>,
    Option<ClassifierOutput>,
)> {
    vec![
        (
            "Eastern paddy field", // monsoon-fed clay, rice territory
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
            },
            None,
            None,
        ),
        (
            "Semi-arid millet plot", // hot, dry live weather drives adjustment
            InputVector {
                nitrogen: 60.0,
                phosphorus: 30.0,
                potassium: 30.0,
                temperature: 35.0,
                humidity: 40.0,
                rainfall: 300.0,
                ph: 6.0,
                soil: SoilType::Sandy,
                season: Season::Kharif,
                region: "Northwest".to_string(),
            },
            Some(WeatherSample {
                temperature: 38.0,
                humidity: 25.0,
            }),
            None,
        ),
        (
            "Irrigated winter wheat", // classifier-backed request
            InputVector {
                nitrogen: 120.0,
                phosphorus: 60.0,
                potassium: 60.0,
                temperature: 18.0,
                humidity: 60.0,
                rainfall: 550.0,
                ph: 6.8,
                soil: SoilType::Loamy,
                season: Season::Rabi,
                region: "North".to_string(),
            },
            None,
            Some(ClassifierOutput {
                labels: vec![
                    "Wheat".to_string(),
                    "Chickpea".to_string(),
                    "Lentil".to_string(),
                    "Pulses".to_string(),
                ],
                probabilities: vec![0.58, 0.21, 0.13, 0.08],
            }),
        ),
    ]
}

fn main() -> anyhow::Result<()> {
    println!("Crop Advisor Sample Run\n");
    println!("=======================\n");

    let advisor = CropAdvisor::new();
    let mut history = Vec::new();

    for (name, input, live_weather, classifier) in scenarios() {
        println!("## {}\n", name);

        let recommendation = advisor.recommend(&input, classifier.as_ref(), live_weather)?;

        println!(
            "  Risk: drought {} / flood {} -> {}",
            recommendation.risk.drought_risk,
            recommendation.risk.flood_risk,
            recommendation.risk_level.display_text()
        );

        for (rank, crop) in recommendation.crops.iter().enumerate() {
            println!(
                "  {}. {} (confidence {} -> {})",
                rank + 1,
                crop.crop,
                crop.confidence,
                crop.risk_adjusted_confidence
            );
            println!(
                "     Plant {} | {} irrigation | {}",
                crop.details.planting_window, crop.details.irrigation, crop.details.expected_yield
            );
        }
        println!();

        history.push(PredictionRecord::from_recommendation(&recommendation));
    }

    let summary = analytics::summarize(&history);
    println!("=======================");
    println!("Dashboard after {} runs:", history.len());
    println!("  Total recommendations: {}", summary.total_recommendations);
    println!("  Average top confidence: {}", summary.average_top_confidence);
    if let Some(level) = summary.latest_risk_level {
        println!("  Latest risk level: {}", level.display_text());
    }
    println!("  Crop frequency:");
    for (crop, count) in analytics::crop_frequency(&history) {
        println!("    {} x{}", crop, count);
    }

    println!("\nDone! Scored {} scenarios", history.len());

    Ok(())
}
