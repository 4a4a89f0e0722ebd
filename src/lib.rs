// ABOUTME: Library entry point for the fitstats workout statistics engine
// ABOUTME: Dispatches positional sensor reading packages to per-type formula sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # fitstats
//!
//! Computes workout statistics (distance, mean speed, calories burned) from
//! raw sensor readings for running, sports walking, and swimming.
//!
//! A sensor package is a short workout-type code plus a fixed-length
//! positional reading list. The [`workouts::build_workout`] factory maps the
//! code to the matching computation variant; the [`workouts::Workout`]
//! contract then produces an immutable [`models::WorkoutSummary`] ready for
//! rendering.
//!
//! ## Architecture
//!
//! - **Workouts**: the shared computation contract and the three variants
//! - **Models**: workout-type tags and the summary value object
//! - **Formatters**: text and JSON renditions of a summary
//! - **Constants**: shared unit conversions
//!
//! ## Example Usage
//!
//! ```rust
//! use fitstats::errors::AppResult;
//! use fitstats::workouts::build_workout;
//!
//! fn main() -> AppResult<()> {
//!     let workout = build_workout("RUN", &[15_000.0, 1.0, 75.0])?;
//!     let summary = workout.summary()?;
//!
//!     assert!((summary.distance_km - 9.75).abs() < 1e-9);
//!     Ok(())
//! }
//! ```

/// Shared unit-conversion constants
pub mod constants;

/// Unified error types for factory dispatch and computation
pub mod errors;

/// Text and JSON rendering of workout summaries
pub mod formatters;

/// Logging configuration for binaries
pub mod logging;

/// Workout-type tags and the summary value object
pub mod models;

/// Computation contract, workout variants, and the factory
pub mod workouts;

pub use errors::{AppError, AppResult};
pub use models::{WorkoutSummary, WorkoutType};
pub use workouts::{build_workout, Workout};
