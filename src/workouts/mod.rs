// ABOUTME: Shared workout computation contract and the sensor-code dispatch factory
// ABOUTME: Default distance/speed/summary implementations with per-variant overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Workout Computation
//!
//! The [`Workout`] trait is the shared computation contract: distance and
//! mean speed have base implementations derived from the action count, and
//! every concrete variant supplies its own calorie formula. Swimming also
//! overrides the distance and speed formulas.
//!
//! [`build_workout`] is the factory: it maps a short sensor code to the
//! matching variant and constructs it from a positional reading list.

use tracing::debug;

use crate::constants::units;
use crate::errors::{AppError, AppResult};
use crate::models::{WorkoutSummary, WorkoutType};

pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

/// Shared computation contract for all workout variants
///
/// The provided methods form the base formula set; variants override the
/// pieces that differ. `summary()` always goes through the object's own
/// methods, so overridden formulas are picked up automatically.
pub trait Workout: Send + Sync + std::fmt::Debug {
    /// Tag identifying the concrete variant
    fn workout_type(&self) -> WorkoutType;

    /// Raw step or stroke count from the sensor reading
    fn action_count(&self) -> f64;

    /// Workout duration in hours. Callers must guarantee a positive value;
    /// the speed formulas divide by it.
    fn duration_hours(&self) -> f64;

    /// Athlete body weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Distance covered by one action, in meters
    ///
    /// Defaults to the land-based step length; swimming overrides this with
    /// its stroke length.
    fn step_length_m(&self) -> f64 {
        units::DEFAULT_STEP_LENGTH_M
    }

    /// Covered distance in kilometers
    fn distance_km(&self) -> f64 {
        self.action_count() * self.step_length_m() / units::METERS_PER_KILOMETER
    }

    /// Mean speed in km/h over the whole workout
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Energy burned in kilocalories
    ///
    /// Every concrete variant supplies its own formula.
    ///
    /// # Errors
    ///
    /// The base contract has no calorie formula; invoking it without an
    /// override returns [`AppError::NotImplemented`].
    fn calories_kcal(&self) -> AppResult<f64> {
        Err(AppError::not_implemented("calories_kcal"))
    }

    /// Assemble the immutable summary from this variant's own formulas
    ///
    /// # Errors
    ///
    /// Propagates [`AppError::NotImplemented`] when the variant is missing a
    /// calorie formula.
    fn summary(&self) -> AppResult<WorkoutSummary> {
        Ok(WorkoutSummary {
            workout_type: self.workout_type(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal()?,
        })
    }
}

/// Create a workout variant from a sensor code and positional readings
///
/// # Errors
///
/// Returns [`AppError::UnknownWorkoutType`] for an unrecognized code and
/// [`AppError::ArityMismatch`] when the reading count does not match the
/// target variant's constructor arity. Nothing is constructed on failure.
pub fn build_workout(code: &str, readings: &[f64]) -> AppResult<Box<dyn Workout>> {
    let workout_type = WorkoutType::from_code(code)?;
    debug!(
        code = workout_type.code(),
        readings = readings.len(),
        "dispatching sensor package"
    );

    match workout_type {
        WorkoutType::Swimming => Ok(Box::new(Swimming::from_readings(readings)?)),
        WorkoutType::Running => Ok(Box::new(Running::from_readings(readings)?)),
        WorkoutType::SportsWalking => Ok(Box::new(SportsWalking::from_readings(readings)?)),
    }
}
