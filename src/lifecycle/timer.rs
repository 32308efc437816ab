// SPDX-License-Identifier: MPL-2.0
//! Cancelable set of one-shot and recurring timers.
//!
//! Timers are plain data owned by whoever owns the set. Nothing runs in the
//! background: the owner asks for due timers with [`TimerSet::pop_due`],
//! typically from a periodic tick. Cancelling a timer removes it from the set,
//! so a cancelled timer can never be returned afterwards.
//!
//! Each timer is stamped with the [`Generation`] that scheduled it, letting the
//! owner recognise timers that belong to a superseded run.

use std::time::{Duration, Instant};

/// Identifier of a scheduled timer, unique within its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Run identifier stamped on every timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    /// Returns the following generation.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A timer returned by [`TimerSet::pop_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<K> {
    pub id: TimerId,
    pub generation: Generation,
    pub kind: K,
    /// The deadline the timer was scheduled for, not the time it was polled.
    pub at: Instant,
}

#[derive(Debug, Clone)]
struct Entry<K> {
    id: TimerId,
    generation: Generation,
    kind: K,
    deadline: Instant,
    period: Option<Duration>,
    /// Insertion order; breaks ties between equal deadlines.
    seq: u64,
}

/// Set of pending timers, cancelable individually or as a whole.
#[derive(Debug, Clone)]
pub struct TimerSet<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
    next_seq: u64,
}

impl<K> Default for TimerSet<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            next_seq: 0,
        }
    }
}

impl<K: Copy> TimerSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire once, `delay` after `now`.
    pub fn schedule_after(
        &mut self,
        kind: K,
        generation: Generation,
        now: Instant,
        delay: Duration,
    ) -> TimerId {
        self.insert(kind, generation, now + delay, None)
    }

    /// Schedules `kind` to fire every `period`, first at `now + period`.
    ///
    /// Periods shorter than one millisecond are raised to one millisecond.
    pub fn schedule_every(
        &mut self,
        kind: K,
        generation: Generation,
        now: Instant,
        period: Duration,
    ) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(kind, generation, now + period, Some(period))
    }

    fn insert(
        &mut self,
        kind: K,
        generation: Generation,
        deadline: Instant,
        period: Option<Duration>,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.entries.push(Entry {
            id,
            generation,
            kind,
            deadline,
            period,
            seq,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Cancels one timer. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Cancels every pending timer and returns how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Removes and returns the earliest timer whose deadline is at or before `now`.
    ///
    /// Recurring timers stay in the set, re-armed one period after the deadline
    /// that just fired, so a late poll does not shift later samples.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired<K>> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(index, _)| index)?;

        let entry = &self.entries[index];
        let fired = Fired {
            id: entry.id,
            generation: entry.generation,
            kind: entry.kind,
            at: entry.deadline,
        };

        match entry.period {
            Some(period) => {
                let seq = self.bump_seq();
                let entry = &mut self.entries[index];
                entry.deadline += period;
                entry.seq = seq;
            }
            None => {
                self.entries.swap_remove(index);
            }
        }

        Some(fired)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest deadline among pending timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    #[cfg(test)]
    fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

impl<K: Copy + PartialEq> TimerSet<K> {
    /// Returns true if a timer of the given kind is pending.
    #[must_use]
    pub fn contains_kind(&self, kind: K) -> bool {
        self.entries.iter().any(|entry| entry.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        A,
        B,
        Tick,
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn nothing_is_due_before_the_deadline() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule_after(Kind::A, Generation::default(), start, ms(100));

        assert!(timers.pop_due(start + ms(99)).is_none());
        let fired = timers.pop_due(start + ms(100)).expect("timer should be due");
        assert_eq!(fired.kind, Kind::A);
        assert_eq!(fired.at, start + ms(100));
        assert!(timers.is_empty());
    }

    #[test]
    fn due_timers_come_out_in_deadline_order() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule_after(Kind::B, Generation::default(), start, ms(50));
        timers.schedule_after(Kind::A, Generation::default(), start, ms(10));

        let now = start + ms(60);
        assert_eq!(timers.pop_due(now).map(|f| f.kind), Some(Kind::A));
        assert_eq!(timers.pop_due(now).map(|f| f.kind), Some(Kind::B));
        assert!(timers.pop_due(now).is_none());
    }

    #[test]
    fn equal_deadlines_fire_in_insertion_order() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule_after(Kind::B, Generation::default(), start, ms(0));
        timers.schedule_after(Kind::A, Generation::default(), start, ms(0));

        assert_eq!(timers.pop_due(start).map(|f| f.kind), Some(Kind::B));
        assert_eq!(timers.pop_due(start).map(|f| f.kind), Some(Kind::A));
    }

    #[test]
    fn recurring_timer_rearms_from_its_own_deadline() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        let id = timers.schedule_every(Kind::Tick, Generation::default(), start, ms(30));

        // Polled late: both samples still land on the 30ms grid.
        let now = start + ms(65);
        let first = timers.pop_due(now).expect("first sample");
        let second = timers.pop_due(now).expect("second sample");
        assert_eq!(first.at, start + ms(30));
        assert_eq!(second.at, start + ms(60));
        assert!(timers.pop_due(now).is_none());
        assert!(timers.contains(id));
        assert_eq!(timers.next_deadline(), Some(start + ms(90)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        let id = timers.schedule_after(Kind::A, Generation::default(), start, ms(10));

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.pop_due(start + ms(1000)).is_none());
    }

    #[test]
    fn cancel_all_clears_one_shot_and_recurring() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule_after(Kind::A, Generation::default(), start, ms(10));
        timers.schedule_every(Kind::Tick, Generation::default(), start, ms(30));

        assert_eq!(timers.cancel_all(), 2);
        assert_eq!(timers.pending(), 0);
        assert_eq!(timers.cancel_all(), 0);
        assert!(timers.next_deadline().is_none());
    }

    #[test]
    fn fired_timers_carry_their_generation() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        let old = Generation::default();
        let new = old.next();
        timers.schedule_after(Kind::A, old, start, ms(0));
        timers.schedule_after(Kind::B, new, start, ms(0));

        assert_eq!(timers.pop_due(start).map(|f| f.generation), Some(old));
        assert_eq!(timers.pop_due(start).map(|f| f.generation), Some(new));
    }

    #[test]
    fn contains_kind_tracks_pending_timers() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        let id = timers.schedule_after(Kind::A, Generation::default(), start, ms(5));
        assert!(timers.contains_kind(Kind::A));
        assert!(!timers.contains_kind(Kind::B));
        timers.cancel(id);
        assert!(!timers.contains_kind(Kind::A));
    }
}
