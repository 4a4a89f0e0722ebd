// ABOUTME: Output format abstraction for rendered workout summaries
// ABOUTME: Fixed-template text sentence with three-decimal rounding, plus a JSON rendition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Summary Rendering
//!
//! Renders a [`WorkoutSummary`] without altering it. The text format is one
//! fixed-template sentence with every numeric field rounded to three decimal
//! places; the JSON format serializes the summary fields verbatim.

use crate::errors::AppResult;
use crate::models::WorkoutSummary;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-template sentence (default)
    #[default]
    Text,
    /// JSON object with the raw summary fields
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Render a summary as the fixed-template sentence
#[must_use]
pub fn format_summary(summary: &WorkoutSummary) -> String {
    format!(
        "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
        summary.workout_type,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal,
    )
}

/// Render a summary in the requested output format
///
/// # Errors
///
/// Returns [`crate::errors::AppError::Serialization`] if JSON serialization
/// fails.
pub fn format_output(summary: &WorkoutSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(format_summary(summary)),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}
