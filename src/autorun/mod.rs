//! Autorun Module - Debounced rebuild scheduling
//!
//! Edits arrive per keystroke, and rebuilding the preview on every one
//! would churn for nothing. The scheduler coalesces a burst of edits
//! into a single rebuild: each edit restarts one quiet-period deadline,
//! and only when the deadline survives untouched does a build fire.
//!
//! There is no timer thread. The scheduler is a value polled from the
//! session tick, which keeps firing on the thread that owns the
//! signals and makes the whole state machine testable with plain
//! `Instant` arithmetic.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Instant;
//! use spark_pen::autorun::AutorunScheduler;
//!
//! let mut sched = AutorunScheduler::new();
//! sched.note_change(Instant::now());
//!
//! // Somewhere in the event loop:
//! if sched.poll(Instant::now()) {
//!     // quiet period elapsed, rebuild now
//! }
//! ```

use std::time::{Duration, Instant};

/// How long the fragments must stay untouched before autorun rebuilds.
pub const QUIET_PERIOD: Duration = Duration::from_millis(600);

/// Observable scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutorunState {
    /// No rebuild scheduled.
    Idle,
    /// A deadline is armed and waiting to be polled due.
    Pending,
}

/// Debounce state machine for automatic rebuilds.
///
/// At most one deadline exists at a time. A new edit replaces it
/// (restart, never queue), so N edits inside one quiet period produce
/// exactly one fire.
#[derive(Debug)]
pub struct AutorunScheduler {
    enabled: bool,
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl AutorunScheduler {
    /// Scheduler with the default quiet period, autorun enabled.
    pub fn new() -> Self {
        Self::with_quiet_period(QUIET_PERIOD)
    }

    /// Scheduler with a custom quiet period.
    pub fn with_quiet_period(quiet_period: Duration) -> Self {
        Self {
            enabled: true,
            quiet_period,
            deadline: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn state(&self) -> AutorunState {
        if self.deadline.is_some() {
            AutorunState::Pending
        } else {
            AutorunState::Idle
        }
    }

    /// Register an edit at `now`.
    ///
    /// Schedules nothing while autorun is disabled. Otherwise the
    /// deadline moves to `now + quiet_period`, replacing any pending
    /// one.
    pub fn note_change(&mut self, now: Instant) {
        if !self.enabled {
            return;
        }
        self.deadline = Some(now + self.quiet_period);
    }

    /// Check whether a scheduled rebuild is due at `now`.
    ///
    /// A due deadline is always consumed, but the fire is only
    /// reported when autorun is still enabled at this moment. A timer
    /// that outlived a disable is a no-op, not a cancellation error.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.enabled {
                    log::debug!("autorun deadline fired");
                    true
                } else {
                    log::debug!("autorun deadline expired while disabled, skipping");
                    false
                }
            }
            _ => false,
        }
    }

    /// Enable or disable autorun.
    ///
    /// Returns true when this call switched autorun on, which is the
    /// caller's cue to build immediately. Switching off leaves any
    /// pending deadline in place; `poll` will swallow it.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let switched_on = enabled && !self.enabled;
        self.enabled = enabled;
        switched_on
    }
}

impl Default for AutorunScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sched = AutorunScheduler::new();
        assert!(sched.is_enabled());
        assert_eq!(sched.state(), AutorunState::Idle);
        assert_eq!(sched.quiet_period(), QUIET_PERIOD);
    }

    #[test]
    fn test_edit_arms_a_deadline() {
        let mut sched = AutorunScheduler::new();
        let t0 = Instant::now();

        sched.note_change(t0);
        assert_eq!(sched.state(), AutorunState::Pending);

        // Not due yet
        assert!(!sched.poll(t0));
        assert!(!sched.poll(t0 + Duration::from_millis(599)));

        // Due exactly at the deadline
        assert!(sched.poll(t0 + QUIET_PERIOD));
        assert_eq!(sched.state(), AutorunState::Idle);
    }

    #[test]
    fn test_fire_consumes_the_deadline() {
        let mut sched = AutorunScheduler::new();
        let t0 = Instant::now();

        sched.note_change(t0);
        assert!(sched.poll(t0 + QUIET_PERIOD));
        assert!(!sched.poll(t0 + QUIET_PERIOD * 2));
    }

    #[test]
    fn test_burst_of_edits_coalesces_to_one_fire() {
        let mut sched = AutorunScheduler::new();
        let t0 = Instant::now();

        sched.note_change(t0);
        sched.note_change(t0 + Duration::from_millis(200));
        sched.note_change(t0 + Duration::from_millis(400));

        // First deadline was replaced, so nothing fires at t0 + quiet
        assert!(!sched.poll(t0 + QUIET_PERIOD));

        // Only the last edit's deadline fires
        assert!(sched.poll(t0 + Duration::from_millis(400) + QUIET_PERIOD));
        assert!(!sched.poll(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_edits_while_disabled_schedule_nothing() {
        let mut sched = AutorunScheduler::new();
        sched.set_enabled(false);

        let t0 = Instant::now();
        sched.note_change(t0);
        assert_eq!(sched.state(), AutorunState::Idle);
        assert!(!sched.poll(t0 + QUIET_PERIOD));
    }

    #[test]
    fn test_disable_leaves_deadline_that_noops() {
        let mut sched = AutorunScheduler::new();
        let t0 = Instant::now();

        sched.note_change(t0);
        sched.set_enabled(false);

        // Deadline still pending, but firing it reports nothing
        assert_eq!(sched.state(), AutorunState::Pending);
        assert!(!sched.poll(t0 + QUIET_PERIOD));

        // And it was consumed by that poll
        assert_eq!(sched.state(), AutorunState::Idle);
    }

    #[test]
    fn test_enabling_requests_an_immediate_build() {
        let mut sched = AutorunScheduler::new();

        sched.set_enabled(false);
        assert!(sched.set_enabled(true));

        // Already on: no second immediate build
        assert!(!sched.set_enabled(true));

        // Turning off never requests a build
        assert!(!sched.set_enabled(false));
        assert!(!sched.set_enabled(false));
    }

    #[test]
    fn test_custom_quiet_period() {
        let quiet = Duration::from_millis(50);
        let mut sched = AutorunScheduler::with_quiet_period(quiet);
        assert_eq!(sched.quiet_period(), quiet);

        let t0 = Instant::now();
        sched.note_change(t0);
        assert!(!sched.poll(t0 + Duration::from_millis(49)));
        assert!(sched.poll(t0 + quiet));
    }

    #[test]
    fn test_default_matches_new() {
        let sched = AutorunScheduler::default();
        assert!(sched.is_enabled());
        assert_eq!(sched.quiet_period(), QUIET_PERIOD);
    }
}
