// ABOUTME: Sports-walking workout variant carrying the athlete height as an extra field
// ABOUTME: Calorie formula combines weight with squared walking speed over height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::units;
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutType;
use crate::workouts::Workout;

/// Sports (race) walking workout
///
/// Uses the base distance and mean-speed formulas unchanged.
///
/// Calorie formula:
/// `(0.035 x weight + (speed_ms^2 / height_m) x 0.029 x weight) x duration_minutes`
/// where `speed_ms` is the mean speed converted to m/s and `height_m` the
/// athlete height converted to meters.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action_count: f64,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl SportsWalking {
    /// Weight multiplier in the calorie formula
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Squared-speed-over-height multiplier in the calorie formula
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Create a walking workout from its fields. Callers must guarantee
    /// `height_cm > 0`; the calorie formula divides by it.
    #[must_use]
    pub const fn new(action_count: f64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }

    /// Construct from a positional reading list:
    /// `[action, duration_hours, weight_kg, height_cm]`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ArityMismatch`] unless exactly four readings are
    /// supplied.
    pub fn from_readings(readings: &[f64]) -> AppResult<Self> {
        match readings {
            [action, duration, weight, height] => {
                Ok(Self::new(*action, *duration, *weight, *height))
            }
            _ => Err(AppError::arity_mismatch(
                WorkoutType::SportsWalking,
                readings.len(),
            )),
        }
    }
}

impl Workout for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
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
        let speed_ms = self.mean_speed_kmh() * units::KMH_TO_MS;
        let height_m = self.height_cm / units::CENTIMETERS_PER_METER;
        let duration_minutes = self.duration_hours * units::MINUTES_PER_HOUR;

        let speed_component =
            speed_ms.powi(2) / height_m * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight_kg;
        let weight_component = Self::CALORIES_WEIGHT_MULTIPLIER * self.weight_kg;

        Ok((weight_component + speed_component) * duration_minutes)
    }
}
