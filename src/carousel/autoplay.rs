//! Autoplay timer lifecycle.

use std::time::Duration;

use crate::carousel::scheduler::{Scheduler, TimerId};

/// Default time between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayState {
    #[default]
    Stopped,
    Running {
        timer: TimerId,
    },
}

/// User interaction that pauses or resumes autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    PointerDown,
    HoverEnter,
    FocusEnter,
    TouchStart,
    HoverLeave,
    FocusLeave,
}

impl Interaction {
    /// True for events that stop autoplay, false for those that restart it.
    pub fn pauses(self) -> bool {
        matches!(
            self,
            Interaction::PointerDown
                | Interaction::HoverEnter
                | Interaction::FocusEnter
                | Interaction::TouchStart
        )
    }
}

/// Two-state controller owning at most one repeating timer.
///
/// `start` and `stop` are idempotent, so overlapping pause/resume events
/// can never leave two timers behind.
#[derive(Debug)]
pub struct Autoplay {
    state: AutoplayState,
    interval: Duration,
    reduced_motion: bool,
}

impl Autoplay {
    pub fn new(interval: Duration, reduced_motion: bool) -> Self {
        Self {
            state: AutoplayState::Stopped,
            interval,
            reduced_motion,
        }
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoplayState::Running { .. })
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether `id` is the live autoplay timer. Ticks from cancelled timers
    /// that were already queued must be dropped.
    pub fn owns(&self, id: TimerId) -> bool {
        self.state == AutoplayState::Running { timer: id }
    }

    /// Returns true when a timer was actually scheduled.
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        if self.reduced_motion || self.is_running() {
            return false;
        }
        let timer = scheduler.schedule_repeating(self.interval);
        self.state = AutoplayState::Running { timer };
        tracing::debug!(timer = timer.raw(), "autoplay started");
        true
    }

    /// Returns true when a running timer was cancelled.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        let AutoplayState::Running { timer } = self.state else {
            return false;
        };
        scheduler.cancel(timer);
        self.state = AutoplayState::Stopped;
        tracing::debug!(timer = timer.raw(), "autoplay stopped");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::scheduler::{IntervalScheduler, ManualClock};

    #[test]
    fn repeated_start_keeps_single_timer() {
        let mut scheduler = IntervalScheduler::new(ManualClock::new());
        let mut autoplay = Autoplay::new(DEFAULT_INTERVAL, false);
        assert_eq!(autoplay.interval(), Duration::from_millis(3000));

        assert!(autoplay.start(&mut scheduler));
        assert!(!autoplay.start(&mut scheduler));
        assert_eq!(scheduler.live(), 1);

        assert!(autoplay.stop(&mut scheduler));
        assert!(!autoplay.stop(&mut scheduler));
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn reduced_motion_never_runs() {
        let mut scheduler = IntervalScheduler::new(ManualClock::new());
        let mut autoplay = Autoplay::new(DEFAULT_INTERVAL, true);
        assert!(!autoplay.start(&mut scheduler));
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn pause_and_resume_sets() {
        assert!(Interaction::PointerDown.pauses());
        assert!(Interaction::TouchStart.pauses());
        assert!(!Interaction::HoverLeave.pauses());
        assert!(!Interaction::FocusLeave.pauses());
    }
}
