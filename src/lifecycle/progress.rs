// SPDX-License-Identifier: MPL-2.0
//! Remaining-time estimate that drives the countdown bar.

use super::request::Countdown;
use crate::config::PROGRESS_TICK_MS;
use std::time::Duration;

/// Progress value of a fresh or completed run.
pub const FULL: f32 = 100.0;

/// Sampling period of the progress estimate.
pub const PROGRESS_TICK: Duration = Duration::from_millis(PROGRESS_TICK_MS);

/// Percentage of the countdown still remaining after `elapsed`.
///
/// Clamped to `0.0..=100.0`. An expired countdown always yields `0.0`, so the
/// result is never NaN.
#[must_use]
pub fn remaining_percent(elapsed: Duration, countdown: Countdown) -> f32 {
    if countdown.is_expired() {
        return 0.0;
    }
    let fraction = elapsed.as_secs_f64() / countdown.as_duration().as_secs_f64();
    (100.0 - fraction * 100.0).clamp(0.0, 100.0) as f32
}
