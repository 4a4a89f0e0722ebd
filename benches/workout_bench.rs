// ABOUTME: Criterion benchmarks for the workout factory and summary pipeline
// ABOUTME: Measures dispatch plus per-variant distance, speed, and calorie computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the workout statistics engine.
//!
//! Measures factory dispatch and full summary assembly for each variant.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitstats::workouts::build_workout;

/// One sample sensor package per workout variant
const PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

fn bench_factory_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory_dispatch");
    for &(code, readings) in PACKAGES {
        group.bench_with_input(BenchmarkId::from_parameter(code), &readings, |b, r| {
            b.iter(|| build_workout(black_box(code), black_box(r)).unwrap());
        });
    }
    group.finish();
}

fn bench_summary_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_assembly");
    for &(code, readings) in PACKAGES {
        let workout = build_workout(code, readings).unwrap();
        group.bench_function(BenchmarkId::from_parameter(code), |b| {
            b.iter(|| workout.summary().unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_factory_dispatch, bench_summary_assembly);
criterion_main!(benches);
