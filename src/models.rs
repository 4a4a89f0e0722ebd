// ABOUTME: Workout-type tags and the immutable summary value object
// ABOUTME: Defines code parsing, display names, and per-type reading arity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Enumeration of supported workout types
///
/// Each type maps to one computation variant and one short sensor code.
/// The set is closed: unrecognized codes are rejected at dispatch time
/// rather than falling through to a default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running workout
    Running,
    /// Sports (race) walking workout
    SportsWalking,
    /// Pool swimming workout
    Swimming,
}

impl WorkoutType {
    /// Parse a workout type from its sensor code (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownWorkoutType`] for any code outside
    /// `SWM` / `RUN` / `WLK`.
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.to_uppercase().as_str() {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            _ => Err(AppError::unknown_workout_type(code)),
        }
    }

    /// Short sensor code for this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Human-readable type label used in rendered summaries
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional readings this type's constructor requires
    #[must_use]
    pub const fn reading_arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Computed statistics for one completed workout
///
/// Created once by [`crate::workouts::Workout::summary`], never mutated,
/// consumed only for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    /// Workout type the statistics were computed for
    pub workout_type: WorkoutType,

    /// Workout duration in hours
    pub duration_hours: f64,

    /// Covered distance in kilometers
    pub distance_km: f64,

    /// Mean speed over the whole workout in km/h
    pub mean_speed_kmh: f64,

    /// Energy burned in kilocalories
    pub calories_kcal: f64,
}
