// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification lifecycle.
//!
//! Measures the performance of:
//! - A full run driven at the host's 10ms tick rate
//! - A single late tick replaying a whole run
//! - Rapid open/close toggling

use criterion::{criterion_group, criterion_main, Criterion};
use iced_feedback::lifecycle::{Controller, NotificationRequest};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn request() -> NotificationRequest {
    NotificationRequest::success("Changes saved successfully").with_duration_ms(5000)
}

/// Benchmark a complete run as the window would drive it.
fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    group.bench_function("full_run_10ms_ticks", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut controller = Controller::new(request());
            controller.set_open(true, t0);
            for step in 0..800u64 {
                black_box(controller.tick(t0 + Duration::from_millis(step * 10)));
            }
            black_box(controller.phase());
        });
    });

    group.bench_function("full_run_single_late_tick", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut controller = Controller::new(request());
            controller.set_open(true, t0);
            black_box(controller.tick(t0 + Duration::from_secs(8)));
        });
    });

    group.finish();
}

/// Benchmark restarting runs back to back.
fn bench_toggling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    group.bench_function("toggle_open_100x", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut controller = Controller::new(request());
            for step in 0..100u64 {
                let now = t0 + Duration::from_millis(step);
                controller.set_open(step % 2 == 0, now);
                black_box(controller.tick(now));
            }
            black_box(controller.pending_timers());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_run, bench_toggling);
criterion_main!(benches);
