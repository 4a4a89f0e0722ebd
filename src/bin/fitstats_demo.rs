// ABOUTME: Demo driver rendering workout summaries for the built-in sample sensor packages
// ABOUTME: Builds each package through the factory and prints one summary per line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Demo driver for the workout statistics engine.
//!
//! Feeds the built-in sample sensor packages through the factory and prints
//! one rendered summary per package. A package that fails to build or
//! summarize is logged and skipped; the batch continues.
//!
//! Usage:
//! ```bash
//! # Render the sample packages as text
//! cargo run --bin fitstats-demo
//!
//! # Render as JSON
//! cargo run --bin fitstats-demo -- --format json
//!
//! # Raise log verbosity
//! RUST_LOG=debug cargo run --bin fitstats-demo
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::error;

use fitstats::formatters::{self, OutputFormat};
use fitstats::logging::{init_logging, LoggingConfig};
use fitstats::workouts::build_workout;

/// Sample sensor packages: one `(code, readings)` pair per workout
const SAMPLE_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser)]
#[command(
    name = "fitstats-demo",
    about = "Render workout summaries for the built-in sample sensor packages"
)]
struct DemoArgs {
    /// Output format for rendered summaries (text or json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = DemoArgs::parse();
    init_logging(&LoggingConfig {
        level: args.log_level,
        ..LoggingConfig::default()
    })?;

    let format = OutputFormat::from_str_param(&args.format);

    for &(code, readings) in SAMPLE_PACKAGES {
        match render_package(code, readings, format) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => error!(code, "failed to process sensor package: {err}"),
        }
    }

    Ok(())
}

/// Build one package through the factory and render its summary
fn render_package(code: &str, readings: &[f64], format: OutputFormat) -> Result<String> {
    let workout = build_workout(code, readings)?;
    let summary = workout.summary()?;
    Ok(formatters::format_output(&summary, format)?)
}
