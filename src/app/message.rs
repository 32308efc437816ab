// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::lifecycle::{Category, Countdown, NotificationRequest, Position};
use crate::ui::feedback::ToastMessage;
use std::time::Instant;

/// Keys the application forwards to the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape dismisses from anywhere.
    Escape,
    /// Enter or Space dismisses while the pointer is over the toast.
    Activate,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A trigger button was pressed.
    Show(Category),
    /// Opens the prepared notification once the previous one was closed.
    Reopen(NotificationRequest),
    PositionSelected(Position),
    DurationSelected(Countdown),
    Toast(ToastMessage),
    Shortcut(Shortcut),
    /// Periodic tick while a notification is active.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Settings loaded by the launcher.
    pub config: Config,
    /// Shown as a warning toast at startup when the settings file was unreadable.
    pub config_warning: Option<String>,
    /// Countdown override from `--duration`.
    pub duration_ms: Option<i64>,
    /// Anchor override from `--position`.
    pub position: Option<Position>,
}
