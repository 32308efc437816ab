// SPDX-License-Identifier: MPL-2.0
//! The notification lifecycle controller.
//!
//! A [`Controller`] drives one notification through its phases. It never
//! reads the clock itself: every operation takes the current [`Instant`], and
//! the host calls [`Controller::tick`] periodically to let due timers fire.
//! This keeps the controller single-threaded and fully deterministic under
//! test.
//!
//! # Runs and generations
//!
//! Opening the notification starts a *run*. Every run, and every dismissal of
//! an active run, moves the controller to a new [`Generation`] after
//! cancelling all pending timers. Timers carry the generation that scheduled
//! them and are dropped if it is no longer current.
//!
//! # Closing
//!
//! A run arms its close callback when it starts. The callback is consumed the
//! first time the run reaches [`Phase::Hidden`] through the exit sequence, so
//! it fires at most once per run no matter how the exit was triggered.

use super::phase::{advance, Phase, Step};
use super::progress::{remaining_percent, FULL, PROGRESS_TICK};
use super::request::{Category, NotificationRequest, Position};
use super::timer::{Generation, TimerId, TimerSet};
use std::fmt;
use std::time::Instant;
use tracing::{debug, trace};

/// User input the rendering layer routes into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Click anywhere on the notification surface.
    SurfaceClicked,
    /// The close button was pressed.
    CloseButton,
    /// Enter or Space while the notification has focus.
    ActivationKey,
    /// Escape, from anywhere in the window.
    Escape,
}

/// What started an exit sequence. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DismissSource {
    Timeout,
    Input(Input),
    OpenFlag,
    Requested,
}

/// Side effect of a [`Controller::tick`] the host may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// A run finished its exit sequence and the close callback was invoked.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    /// Entry delay of the phase it was scheduled from.
    PhaseStep(Phase),
    AutoDismiss,
    ProgressTick,
}

#[derive(Debug, Clone, Copy, Default)]
struct RunContext {
    generation: Generation,
    /// Set when a run starts, consumed when it reaches `Hidden`.
    close_armed: bool,
}

#[derive(Debug)]
struct LifecycleState {
    phase: Phase,
    progress: f32,
    visible_since: Option<Instant>,
    timers: TimerSet<TimerKind>,
    run: RunContext,
}

impl Default for LifecycleState {
    fn default() -> Self {
        Self {
            phase: Phase::Hidden,
            progress: FULL,
            visible_since: None,
            timers: TimerSet::new(),
            run: RunContext::default(),
        }
    }
}

/// Per-render snapshot handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub phase: Phase,
    pub progress: f32,
    pub show_content: bool,
    pub category: Category,
    pub position: Position,
    pub message: &'a str,
}

type CloseCallback = Box<dyn FnMut() + Send>;

/// Drives one notification through mount, entrance, countdown and exit.
pub struct Controller {
    request: NotificationRequest,
    open: bool,
    state: LifecycleState,
    on_close: Option<CloseCallback>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("request", &self.request)
            .field("open", &self.open)
            .field("state", &self.state)
            .field("has_on_close", &self.on_close.is_some())
            .finish()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(NotificationRequest::default())
    }
}

impl Controller {
    /// Creates a closed controller for the given content.
    #[must_use]
    pub fn new(request: NotificationRequest) -> Self {
        Self {
            request,
            open: false,
            state: LifecycleState::default(),
            on_close: None,
        }
    }

    /// Sets the callback invoked once per completed run.
    #[must_use]
    pub fn with_on_close(mut self, on_close: impl FnMut() + Send + 'static) -> Self {
        self.set_on_close(on_close);
        self
    }

    pub fn set_on_close(&mut self, on_close: impl FnMut() + Send + 'static) {
        self.on_close = Some(Box::new(on_close));
    }

    /// Applies the caller's open flag. Only transitions have an effect.
    pub fn set_open(&mut self, open: bool, now: Instant) {
        if open == self.open {
            return;
        }
        self.open = open;

        if open {
            self.start_run(now);
        } else {
            self.dismiss_from(DismissSource::OpenFlag, now);
        }
    }

    /// Replaces the notification content.
    ///
    /// A different countdown while open restarts the run from `Mounted`;
    /// anything else only changes what the next frame renders.
    pub fn set_request(&mut self, request: NotificationRequest, now: Instant) {
        let countdown_changed = request.countdown() != self.request.countdown();
        self.request = request;

        if countdown_changed && self.open {
            debug!(
                countdown_ms = self.request.countdown().as_millis(),
                "countdown changed while open, restarting run"
            );
            self.start_run(now);
        }
    }

    /// Starts the exit sequence. Does nothing if hidden or already exiting.
    ///
    /// Returns `true` if an exit sequence was started.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        self.dismiss_from(DismissSource::Requested, now)
    }

    /// Routes click and keyboard input into [`Controller::dismiss`].
    ///
    /// Returns `true` if the input started an exit sequence.
    pub fn handle_input(&mut self, input: Input, now: Instant) -> bool {
        if self.state.phase.is_hidden() {
            return false;
        }
        self.dismiss_from(DismissSource::Input(input), now)
    }

    /// Fires every timer due at `now`, in deadline order.
    ///
    /// Each timer is evaluated at its own deadline, so a late tick replays the
    /// missed transitions exactly as if it had arrived on time.
    pub fn tick(&mut self, now: Instant) -> Effect {
        let mut effect = Effect::None;

        while let Some(fired) = self.state.timers.pop_due(now) {
            if fired.generation != self.state.run.generation {
                trace!(
                    stale = fired.generation.value(),
                    current = self.state.run.generation.value(),
                    "dropping timer from superseded run"
                );
                self.state.timers.cancel(fired.id);
                continue;
            }

            match fired.kind {
                TimerKind::PhaseStep(from) => {
                    if from != self.state.phase {
                        continue;
                    }
                    let next = advance(self.state.phase, Step::Elapsed);
                    if self.enter(next, fired.at) == Effect::Closed {
                        effect = Effect::Closed;
                    }
                }
                TimerKind::AutoDismiss => {
                    // Final sample so the bar ends empty.
                    self.record_progress(fired.at);
                    self.dismiss_from(DismissSource::Timeout, fired.at);
                }
                TimerKind::ProgressTick => self.sample_progress(fired.id, fired.at),
            }
        }

        effect
    }

    /// Cancels every pending timer without running the exit sequence.
    ///
    /// Used when the host drops the notification mid-animation. The close
    /// callback is not invoked.
    pub fn teardown(&mut self) {
        let cancelled = self.state.timers.cancel_all();
        if cancelled > 0 || !self.state.phase.is_hidden() {
            debug!(
                cancelled,
                phase = self.state.phase.name(),
                "notification torn down"
            );
        }
        self.state.run.generation = self.state.run.generation.next();
        self.state.run.close_armed = false;
        self.state.phase = Phase::Hidden;
        self.state.progress = FULL;
        self.state.visible_since = None;
        self.open = false;
    }

    /// Snapshot of everything the rendering layer needs for one frame.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            phase: self.state.phase,
            progress: self.state.progress,
            show_content: self.state.phase.shows_content(),
            category: self.request.category(),
            position: self.request.position(),
            message: self.request.message(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Remaining countdown in percent.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    #[must_use]
    pub fn request(&self) -> &NotificationRequest {
        &self.request
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns true while anything is shown or scheduled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.state.phase.is_hidden() || !self.state.timers.is_empty()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.timers.pending()
    }

    /// When the next timer is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.timers.next_deadline()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.state.run.generation
    }

    /// Returns true while the auto-dismiss deadline is pending.
    #[must_use]
    pub fn has_countdown(&self) -> bool {
        self.state.timers.contains_kind(TimerKind::AutoDismiss)
    }

    /// Returns true while progress sampling is pending.
    #[must_use]
    pub fn is_sampling_progress(&self) -> bool {
        self.state.timers.contains_kind(TimerKind::ProgressTick)
    }

    fn start_run(&mut self, now: Instant) {
        let cancelled = self.state.timers.cancel_all();
        let run = &mut self.state.run;
        run.generation = run.generation.next();
        run.close_armed = true;
        self.state.progress = FULL;
        self.state.visible_since = None;

        debug!(
            generation = run.generation.value(),
            cancelled,
            category = %self.request.category(),
            countdown_ms = self.request.countdown().as_millis(),
            "notification run started"
        );

        let next = advance(self.state.phase, Step::Open);
        self.enter(next, now);
    }

    fn dismiss_from(&mut self, source: DismissSource, now: Instant) -> bool {
        let phase = self.state.phase;
        if phase.is_hidden() || phase.is_exiting() {
            trace!(?source, phase = phase.name(), "dismiss ignored");
            return false;
        }

        let cancelled = self.state.timers.cancel_all();
        self.state.run.generation = self.state.run.generation.next();
        debug!(?source, cancelled, from = phase.name(), "notification dismissed");

        self.enter(advance(phase, Step::Dismiss), now);
        true
    }

    /// Makes `phase` current at `at` and schedules whatever it needs.
    fn enter(&mut self, phase: Phase, at: Instant) -> Effect {
        self.state.phase = phase;
        let generation = self.state.run.generation;
        trace!(phase = phase.name(), generation = generation.value(), "phase entered");

        if let Some(delay) = phase.entry_delay() {
            self.state
                .timers
                .schedule_after(TimerKind::PhaseStep(phase), generation, at, delay);
        }

        match phase {
            Phase::Visible => {
                self.begin_countdown(at);
                Effect::None
            }
            Phase::Hidden => self.finish_run(),
            _ => Effect::None,
        }
    }

    fn begin_countdown(&mut self, at: Instant) {
        let generation = self.state.run.generation;
        let countdown = self.request.countdown();
        self.state.visible_since = Some(at);
        self.state.progress = FULL;

        self.state
            .timers
            .schedule_every(TimerKind::ProgressTick, generation, at, PROGRESS_TICK);
        self.state.timers.schedule_after(
            TimerKind::AutoDismiss,
            generation,
            at,
            countdown.as_duration(),
        );
    }

    /// Stops sampling once the countdown is used up.
    fn sample_progress(&mut self, tick: TimerId, at: Instant) {
        match self.record_progress(at) {
            Some(remaining) if remaining > 0.0 => {}
            _ => {
                self.state.timers.cancel(tick);
            }
        }
    }

    fn record_progress(&mut self, at: Instant) -> Option<f32> {
        let since = self.state.visible_since?;
        let remaining = remaining_percent(
            at.saturating_duration_since(since),
            self.request.countdown(),
        );
        self.state.progress = remaining.min(self.state.progress);
        trace!(progress = self.state.progress, "progress sampled");
        Some(remaining)
    }

    fn finish_run(&mut self) -> Effect {
        self.state.timers.cancel_all();
        self.state.progress = FULL;
        self.state.visible_since = None;

        if !std::mem::take(&mut self.state.run.close_armed) {
            return Effect::None;
        }

        debug!(
            generation = self.state.run.generation.value(),
            "notification closed"
        );
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
        Effect::Closed
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.state.timers.cancel_all();
    }
}
