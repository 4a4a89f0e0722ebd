// ABOUTME: Running workout variant with the base distance and speed formulas
// ABOUTME: Calorie formula scales mean speed by weight and duration in minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::units;
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutType;
use crate::workouts::Workout;

/// Running workout
///
/// Uses the base distance and mean-speed formulas unchanged.
///
/// Calorie formula:
/// `(18 x mean_speed + 1.79) x weight_kg / 1000 x duration_minutes`
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    action_count: f64,
    duration_hours: f64,
    weight_kg: f64,
}

impl Running {
    /// Mean-speed multiplier in the calorie formula
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;

    /// Mean-speed shift in the calorie formula
    const CALORIES_SPEED_SHIFT: f64 = 1.79;

    /// Create a running workout from its invariant fields
    #[must_use]
    pub const fn new(action_count: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    /// Construct from a positional reading list: `[action, duration_hours, weight_kg]`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ArityMismatch`] unless exactly three readings are
    /// supplied.
    pub fn from_readings(readings: &[f64]) -> AppResult<Self> {
        match readings {
            [action, duration, weight] => Ok(Self::new(*action, *duration, *weight)),
            _ => Err(AppError::arity_mismatch(
                WorkoutType::Running,
                readings.len(),
            )),
        }
    }
}

impl Workout for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn action_count(&self) -> f64 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn calories_kcal(&self) -> AppResult<f64> {
        let duration_minutes = self.duration_hours * units::MINUTES_PER_HOUR;
        Ok(
            Self::CALORIES_SPEED_MULTIPLIER.mul_add(self.mean_speed_kmh(), Self::CALORIES_SPEED_SHIFT)
                * self.weight_kg
                / units::METERS_PER_KILOMETER
                * duration_minutes,
        )
    }
}
