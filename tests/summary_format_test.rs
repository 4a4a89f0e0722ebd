// ABOUTME: Integration tests for summary rendering in text and JSON formats
// ABOUTME: Verifies the fixed sentence template, three-decimal rounding, and field fidelity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitstats::formatters::{format_output, format_summary, OutputFormat};
use fitstats::models::WorkoutSummary;
use fitstats::workouts::build_workout;
use serde_json::Value;

fn summarize(code: &str, readings: &[f64]) -> WorkoutSummary {
    build_workout(code, readings).unwrap().summary().unwrap()
}

#[test]
fn test_text_template_running() {
    let summary = summarize("RUN", &[15_000.0, 1.0, 75.0]);

    assert_eq!(
        format_summary(&summary),
        "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories burned: 797.805."
    );
}

#[test]
fn test_text_template_swimming() {
    let summary = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]);

    assert_eq!(
        format_summary(&summary),
        "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn test_text_template_walking_rounds_to_three_decimals() {
    let summary = summarize("WLK", &[9_000.0, 1.0, 75.0, 180.0]);

    assert_eq!(
        format_summary(&summary),
        "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
         Mean speed: 5.850 km/h; Calories burned: 349.252."
    );
}

#[test]
fn test_text_is_the_default_output_format() {
    let summary = summarize("RUN", &[15_000.0, 1.0, 75.0]);

    let via_default = format_output(&summary, OutputFormat::default()).unwrap();
    assert_eq!(via_default, format_summary(&summary));
}

#[test]
fn test_json_output_preserves_summary_fields() {
    let summary = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]);

    let rendered = format_output(&summary, OutputFormat::Json).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["workout_type"], "swimming");
    assert!((value["duration_hours"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((value["mean_speed_kmh"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((value["calories_kcal"].as_f64().unwrap() - 336.0).abs() < 1e-9);
    assert!(value["distance_km"].is_number());
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("text"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str_param("csv"), OutputFormat::Text);
}
