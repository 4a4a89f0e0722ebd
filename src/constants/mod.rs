// ABOUTME: Shared unit-conversion constants used across workout variants
// ABOUTME: Per-variant formula coefficients live as associated constants on each variant type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Centralized unit conversions.
//!
//! Only conversions shared by every variant belong here. Formula
//! coefficients specific to one workout type (calorie multipliers, the
//! swimming stroke length) are associated constants on the variant itself so
//! no variant can observe another's tuning.

/// Unit conversions for distance, time, and speed
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Distance covered by one land-based action (step), in meters.
    /// Swimming overrides this with its stroke length.
    pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

    /// km/h to m/s conversion factor
    pub const KMH_TO_MS: f64 = 0.278;

    /// Centimeters per meter
    pub const CENTIMETERS_PER_METER: f64 = 100.0;
}
