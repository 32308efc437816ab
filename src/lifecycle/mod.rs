// SPDX-License-Identifier: MPL-2.0
//! Timed lifecycle of a single feedback notification.
//!
//! This module is independent of any GUI toolkit. The host owns a
//! [`Controller`], forwards the caller's open flag and user input to it, calls
//! [`Controller::tick`] regularly, and renders the [`Frame`] it exposes.
//!
//! # Components
//!
//! - [`phase`] - phases and the transition function
//! - [`timer`] - cancelable timer set stamped with run generations
//! - [`progress`] - remaining-time estimate for the countdown bar
//! - [`request`] - caller-supplied content and configuration
//! - [`controller`] - ties the above together
//!
//! # Usage
//!
//! ```
//! use iced_feedback::lifecycle::{Controller, NotificationRequest, Phase};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut controller = Controller::new(NotificationRequest::success("Saved"));
//!
//! controller.set_open(true, start);
//! controller.tick(start + Duration::from_millis(1320));
//! assert_eq!(controller.phase(), Phase::Visible);
//! ```

pub mod controller;
pub mod phase;
pub mod progress;
pub mod request;
pub mod timer;

pub use controller::{Controller, Effect, Frame, Input};
pub use phase::{advance, Phase, Step};
pub use progress::remaining_percent;
pub use request::{Category, Countdown, NotificationRequest, Position};
pub use timer::{Generation, TimerId, TimerSet};
