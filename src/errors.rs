// ABOUTME: Unified error types for sensor package dispatch and workout computation
// ABOUTME: Typed variants for unknown codes, reading arity mismatches, and contract violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Error Handling
//!
//! Every failure in the computation core is one of a small closed set of
//! typed errors. All of them are fatal to the single request that raised
//! them; the core has no batch or retry concept.

use thiserror::Error;

use crate::models::WorkoutType;

/// Result type alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Unified error type for the workout statistics engine
#[derive(Debug, Error)]
pub enum AppError {
    /// Factory received a workout-type code outside the recognized set
    #[error("unknown workout type '{code}' (supported codes: SWM, RUN, WLK)")]
    UnknownWorkoutType {
        /// The unrecognized code, as supplied by the caller
        code: String,
    },

    /// Reading list length does not match the target variant's field count
    #[error("{workout_type} readings expect {expected} values, got {actual}")]
    ArityMismatch {
        /// Variant the readings were dispatched to
        workout_type: WorkoutType,
        /// Required reading count for that variant
        expected: usize,
        /// Reading count actually supplied
        actual: usize,
    },

    /// An operation was invoked on the base computation contract without an
    /// override. A programming-contract violation, not a user input error.
    #[error("operation '{operation}' is not implemented by the base workout contract")]
    NotImplemented {
        /// Name of the contract operation that was missing an override
        operation: &'static str,
    },

    /// Summary serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Create an unknown-workout-type error from the offending code
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType { code: code.into() }
    }

    /// Create an arity-mismatch error; the expected count is looked up from
    /// the target variant's reading arity
    #[must_use]
    pub const fn arity_mismatch(workout_type: WorkoutType, actual: usize) -> Self {
        Self::ArityMismatch {
            workout_type,
            expected: workout_type.reading_arity(),
            actual,
        }
    }

    /// Create a not-implemented error for a base-contract operation
    #[must_use]
    pub const fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented { operation }
    }
}
