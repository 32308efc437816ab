// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied notification content and configuration.
//!
//! A [`NotificationRequest`] is immutable for the duration of a run: the
//! controller only reads it. Changing it goes through
//! [`Controller::set_request`](super::Controller::set_request).

use crate::config::DEFAULT_DURATION_MS;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Kind of feedback, which selects the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

impl Category {
    /// Every category, in picker order.
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Info,
        Category::Warning,
        Category::Error,
    ];

    /// Returns the kebab-case name used in config files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s.trim())
            .ok_or_else(|| Error::InvalidArgument(format!("unknown category: {s}")))
    }
}

/// Screen anchor the notification is placed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopCenter,
    TopLeft,
    TopRight,
    BottomCenter,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// Every anchor, in picker order.
    pub const ALL: [Position; 6] = [
        Position::TopCenter,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Returns the kebab-case name used in config files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopCenter => "top-center",
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomCenter => "bottom-center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Human-readable label for pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Position::TopCenter => "Top Center",
            Position::TopLeft => "Top Left",
            Position::TopRight => "Top Right",
            Position::BottomCenter => "Bottom Center",
            Position::BottomLeft => "Bottom Left",
            Position::BottomRight => "Bottom Right",
        }
    }

    /// Returns true for the three anchors along the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopCenter | Position::TopLeft | Position::TopRight
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s.trim())
            .ok_or_else(|| Error::InvalidArgument(format!("unknown position: {s}")))
    }
}

/// Auto-dismiss countdown, in whole milliseconds.
///
/// Non-positive and non-finite inputs collapse to zero, which the controller
/// treats as an already expired countdown.
///
/// # Example
///
/// ```
/// use iced_feedback::lifecycle::Countdown;
///
/// assert_eq!(Countdown::from_millis(2000).as_millis(), 2000);
/// assert!(Countdown::from_millis(-5).is_expired());
/// assert!(Countdown::from_secs_f64(f64::NAN).is_expired());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Countdown(u64);

impl Countdown {
    /// Creates a countdown from signed milliseconds, clamping negatives to zero.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(u64::try_from(millis).unwrap_or(0))
    }

    /// Creates a countdown from fractional seconds.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            // Saturating float-to-int cast.
            Self((secs * 1000.0).round() as u64)
        } else {
            Self(0)
        }
    }

    /// Returns the countdown in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the countdown as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when there is no time left to count down.
    #[must_use]
    pub fn is_expired(self) -> bool {
        self.0 == 0
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self(DEFAULT_DURATION_MS)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 1000 == 0 {
            write!(f, "{} seconds", self.0 / 1000)
        } else {
            write!(f, "{} ms", self.0)
        }
    }
}

/// What to show and for how long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    message: String,
    category: Category,
    countdown: Countdown,
    position: Position,
}

impl NotificationRequest {
    /// Creates a request with the default countdown and position.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category,
            countdown: Countdown::default(),
            position: Position::default(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Category::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Category::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Category::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Category::Info, message)
    }

    /// Sets the auto-dismiss countdown in milliseconds.
    #[must_use]
    pub fn with_duration_ms(mut self, millis: i64) -> Self {
        self.countdown = Countdown::from_millis(millis);
        self
    }

    #[must_use]
    pub fn with_countdown(mut self, countdown: Countdown) -> Self {
        self.countdown = countdown;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self::new(Category::default(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_uses_five_seconds_at_top_center() {
        let request = NotificationRequest::success("saved");
        assert_eq!(request.countdown().as_millis(), 5000);
        assert_eq!(request.position(), Position::TopCenter);
        assert_eq!(request.category(), Category::Success);
        assert_eq!(request.message(), "saved");
    }

    #[test]
    fn countdown_clamps_non_positive_values() {
        assert!(Countdown::from_millis(0).is_expired());
        assert!(Countdown::from_millis(-250).is_expired());
        assert!(!Countdown::from_millis(1).is_expired());
    }

    #[test]
    fn countdown_from_secs_rejects_non_finite() {
        assert!(Countdown::from_secs_f64(f64::INFINITY).is_expired());
        assert!(Countdown::from_secs_f64(f64::NAN).is_expired());
        assert!(Countdown::from_secs_f64(-1.0).is_expired());
        assert_eq!(Countdown::from_secs_f64(2.5).as_millis(), 2500);
    }

    #[test]
    fn position_parses_kebab_case() {
        assert_eq!(
            "bottom-right".parse::<Position>().ok(),
            Some(Position::BottomRight)
        );
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn position_display_parses_back() {
        for position in Position::ALL {
            let text = position.to_string();
            assert_eq!(text.parse::<Position>().ok(), Some(position), "{text}");
        }
        assert_eq!(Position::BottomRight.to_string(), "bottom-right");
    }

    #[test]
    fn category_parses_kebab_case() {
        assert_eq!("warning".parse::<Category>().ok(), Some(Category::Warning));
        assert!("fatal".parse::<Category>().is_err());
    }

    #[test]
    fn top_anchors_are_detected() {
        let top: Vec<_> = Position::ALL.into_iter().filter(|p| p.is_top()).collect();
        assert_eq!(top.len(), 3);
        assert!(!Position::BottomCenter.is_top());
    }

    #[test]
    fn builder_overrides_defaults() {
        let request = NotificationRequest::error("failed")
            .with_duration_ms(2000)
            .with_position(Position::BottomLeft);
        assert_eq!(request.countdown().as_millis(), 2000);
        assert_eq!(request.position(), Position::BottomLeft);
    }
}
