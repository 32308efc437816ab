// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Countdown**: Auto-dismiss duration and picker presets
//! - **Animation**: Entry delay of each timed phase
//! - **Sampling**: Progress and host tick intervals
//! - **Logging**: Fallback log filter

// ==========================================================================
// Countdown Defaults
// ==========================================================================

/// Default auto-dismiss duration (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Durations offered by the demo's duration picker (in milliseconds).
pub const DURATION_PRESETS_MS: [u64; 5] = [2000, 3000, 5000, 8000, 10_000];

/// Delay between closing the current notification and opening the next one.
pub const REOPEN_DELAY_MS: u64 = 50;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Time spent mounted off-screen before the circle starts moving in.
pub const MOUNTED_MS: u64 = 20;

/// Duration of the circle entrance.
pub const CIRCLE_IN_MS: u64 = 700;

/// Duration of the circle-to-card expansion.
pub const EXPANDED_MS: u64 = 600;

/// Duration of the card-to-circle collapse.
pub const COLLAPSING_MS: u64 = 600;

/// Duration of the circle exit.
pub const CIRCLE_OUT_MS: u64 = 500;

// ==========================================================================
// Sampling Defaults
// ==========================================================================

/// Progress bar sampling interval.
pub const PROGRESS_TICK_MS: u64 = 30;

/// How often the host polls the controller while a notification is active.
pub const HOST_TICK_MS: u64 = 10;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when neither the CLI, `RUST_LOG` nor the config set one.
pub const DEFAULT_LOG_FILTER: &str = "info";
