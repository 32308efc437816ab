// SPDX-License-Identifier: MPL-2.0
//! Visual phases of a notification and the transition function between them.
//!
//! ```text
//! Enter:  Hidden -> Mounted -> CircleIn -> Expanded -> Visible
//! Exit:   (any shown phase) -> Collapsing -> CircleOut -> Hidden
//! ```
//!
//! Every timed phase has an entry delay in [`Phase::entry_delay`]; once the
//! delay elapses the controller feeds [`Step::Elapsed`] into [`advance`].

use crate::config::{
    CIRCLE_IN_MS, CIRCLE_OUT_MS, COLLAPSING_MS, EXPANDED_MS, MOUNTED_MS,
};
use std::time::Duration;

/// A discrete step of the entrance or exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing rendered. Initial and terminal state of every run.
    #[default]
    Hidden,
    /// Placed off-screen for one frame so the entrance can animate.
    Mounted,
    /// Small circle carrying the icon slides in.
    CircleIn,
    /// Circle widens into the full card; content fades in.
    Expanded,
    /// Stable and interactive; the countdown runs.
    Visible,
    /// Card shrinks back to a circle.
    Collapsing,
    /// Circle slides out.
    CircleOut,
}

/// Input to the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A run was requested.
    Open,
    /// The current phase's entry delay elapsed.
    Elapsed,
    /// The notification should leave.
    Dismiss,
}

impl Phase {
    /// How long the phase lasts before [`Step::Elapsed`] moves it on.
    ///
    /// `Hidden` and `Visible` are not timed: the former waits for a run,
    /// the latter for a dismissal.
    #[must_use]
    pub fn entry_delay(self) -> Option<Duration> {
        let millis = match self {
            Phase::Mounted => MOUNTED_MS,
            Phase::CircleIn => CIRCLE_IN_MS,
            Phase::Expanded => EXPANDED_MS,
            Phase::Collapsing => COLLAPSING_MS,
            Phase::CircleOut => CIRCLE_OUT_MS,
            Phase::Hidden | Phase::Visible => return None,
        };
        Some(Duration::from_millis(millis))
    }

    /// Message body and close button are only rendered in these phases.
    #[must_use]
    pub fn shows_content(self) -> bool {
        matches!(self, Phase::Expanded | Phase::Visible)
    }

    #[must_use]
    pub fn is_exiting(self) -> bool {
        matches!(self, Phase::Collapsing | Phase::CircleOut)
    }

    #[must_use]
    pub fn is_hidden(self) -> bool {
        self == Phase::Hidden
    }

    /// Short lowercase name, used in log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Hidden => "hidden",
            Phase::Mounted => "mounted",
            Phase::CircleIn => "circle-in",
            Phase::Expanded => "expanded",
            Phase::Visible => "visible",
            Phase::Collapsing => "collapsing",
            Phase::CircleOut => "circle-out",
        }
    }
}

/// Single transition function of the phase machine.
///
/// `Open` always restarts from `Mounted`. `Dismiss` is absorbed by the exit
/// phases and by `Hidden`, which keeps dismissal idempotent.
#[must_use]
pub fn advance(phase: Phase, step: Step) -> Phase {
    match (phase, step) {
        (_, Step::Open) => Phase::Mounted,

        (Phase::Mounted, Step::Elapsed) => Phase::CircleIn,
        (Phase::CircleIn, Step::Elapsed) => Phase::Expanded,
        (Phase::Expanded, Step::Elapsed) => Phase::Visible,
        (Phase::Collapsing, Step::Elapsed) => Phase::CircleOut,
        (Phase::CircleOut, Step::Elapsed) => Phase::Hidden,
        (Phase::Hidden | Phase::Visible, Step::Elapsed) => phase,

        (Phase::Hidden | Phase::Collapsing | Phase::CircleOut, Step::Dismiss) => phase,
        (Phase::Mounted | Phase::CircleIn | Phase::Expanded | Phase::Visible, Step::Dismiss) => {
            Phase::Collapsing
        }
    }
}
