// ABOUTME: Swimming workout variant with pool-based speed and stroke-based distance
// ABOUTME: Overrides the step length, mean speed, and calorie formulas of the base contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::units;
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutType;
use crate::workouts::Workout;

/// Pool swimming workout
///
/// Distance keeps the base action-count formula but with the stroke length
/// constant; the sensor's stroke count participates even though mean speed
/// ignores it. Mean speed is derived from the pool geometry instead:
/// `pool_length_m x pool_lap_count / 1000 / duration_hours`.
///
/// Calorie formula: `(mean_speed + 1.1) x 2 x weight_kg x duration_hours`
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action_count: f64,
    duration_hours: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_lap_count: f64,
}

impl Swimming {
    /// Distance covered by one stroke, in meters
    const STROKE_LENGTH_M: f64 = 1.38;

    /// Mean-speed shift in the calorie formula
    const CALORIES_SPEED_SHIFT: f64 = 1.1;

    /// Weight multiplier in the calorie formula
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// Create a swimming workout from its fields
    #[must_use]
    pub const fn new(
        action_count: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lap_count,
        }
    }

    /// Construct from a positional reading list:
    /// `[action, duration_hours, weight_kg, pool_length_m, pool_lap_count]`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ArityMismatch`] unless exactly five readings are
    /// supplied.
    pub fn from_readings(readings: &[f64]) -> AppResult<Self> {
        match readings {
            [action, duration, weight, pool_length, pool_laps] => Ok(Self::new(
                *action,
                *duration,
                *weight,
                *pool_length,
                *pool_laps,
            )),
            _ => Err(AppError::arity_mismatch(
                WorkoutType::Swimming,
                readings.len(),
            )),
        }
    }
}

impl Workout for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
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

    fn step_length_m(&self) -> f64 {
        Self::STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count
            / units::METERS_PER_KILOMETER
            / self.duration_hours
    }

    fn calories_kcal(&self) -> AppResult<f64> {
        Ok((self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours)
    }
}
