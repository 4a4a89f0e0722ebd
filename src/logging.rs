// ABOUTME: Logging configuration and subscriber setup for the demo binary
// ABOUTME: EnvFilter-driven levels with compact or pretty console output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Logging setup for binaries.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the binary's job. `RUST_LOG` takes precedence over the configured
//! default level.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line output
    #[default]
    Compact,
    /// Multi-line output with field breakdown
    Pretty,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level directive when `RUST_LOG` is unset
    pub level: String,
    /// Console output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.format {
        LogFormat::Compact => builder
            .compact()
            .try_init()
            .map_err(|e| anyhow!("failed to install tracing subscriber: {e}")),
        LogFormat::Pretty => builder
            .pretty()
            .try_init()
            .map_err(|e| anyhow!("failed to install tracing subscriber: {e}")),
    }
}
