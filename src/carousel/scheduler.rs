//! Injected timer capability for autoplay.
//!
//! The core never touches wall-clock timers directly. It asks a
//! [`Scheduler`] for a repeating timer and receives ticks back through
//! [`Carousel::on_timer`](crate::carousel::Carousel::on_timer), which keeps
//! the autoplay logic testable with a [`ManualClock`].

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Opaque handle for one scheduled repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Schedule-repeating / cancel capability.
pub trait Scheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Cancel a timer. Unknown or already-cancelled ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_due: Instant,
}

/// Polled scheduler: the event loop asks for due timers instead of being
/// interrupted by them, so ticks are serialized with every other event.
#[derive(Debug)]
pub struct IntervalScheduler<C: Clock = SystemClock> {
    clock: C,
    timers: BTreeMap<TimerId, Interval>,
    next_id: u64,
}

const MIN_PERIOD: Duration = Duration::from_millis(1);

impl<C: Clock> IntervalScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            timers: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of timers currently scheduled.
    pub fn live(&self) -> usize {
        self.timers.len()
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Time until the earliest deadline, zero if one is already due.
    pub fn until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.timers
            .values()
            .map(|interval| interval.next_due.saturating_duration_since(now))
            .min()
    }

    /// Collect the timers that have come due, oldest deadline first.
    ///
    /// Each timer yields at most one tick per poll. Periods missed during a
    /// stall are skipped, and the next deadline stays on the original phase.
    pub fn poll_due(&mut self) -> Vec<TimerId> {
        let now = self.clock.now();
        let mut fired: Vec<(Instant, TimerId)> = Vec::new();
        for (id, interval) in self.timers.iter_mut() {
            if interval.next_due > now {
                continue;
            }
            fired.push((interval.next_due, *id));
            interval.next_due = next_deadline(interval, now);
        }
        fired.sort();
        fired.into_iter().map(|(_, id)| id).collect()
    }
}

/// First deadline strictly after `now` on the interval's phase.
fn next_deadline(interval: &Interval, now: Instant) -> Instant {
    let late = now.duration_since(interval.next_due).as_nanos();
    let phase = late % interval.period.as_nanos();
    let phase = Duration::from_nanos(u64::try_from(phase).unwrap_or(0));
    now + (interval.period - phase)
}

impl<C: Clock> Scheduler for IntervalScheduler<C> {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let period = period.max(MIN_PERIOD);
        self.timers.insert(
            id,
            Interval {
                period,
                next_due: self.clock.now() + period,
            },
        );
        tracing::trace!(timer = id.0, period_ms = period.as_millis() as u64, "timer scheduled");
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            tracing::trace!(timer = id.0, "timer cancelled");
        }
    }
}
