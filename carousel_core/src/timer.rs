// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned one-shot timers driven by caller-supplied time.
//!
//! A [`Timer`] is a deadline, not a callback: it is armed with a delay,
//! polled with the current time, and fires at most once per arming. Re-arming
//! an armed timer replaces its deadline, which gives debounce semantics for
//! free (only the last arming in a burst fires).

use crate::time::{Duration, HostTime};

/// A cancelable one-shot deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<HostTime>,
}

impl Timer {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` after `now`, replacing any pending
    /// deadline.
    pub fn arm(&mut self, now: HostTime, delay: Duration) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarms the timer. Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns the pending deadline, if armed.
    #[must_use]
    pub const fn deadline(&self) -> Option<HostTime> {
        self.deadline
    }

    /// Returns `true` if a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires the timer if its deadline has been reached.
    ///
    /// Returns `true` exactly once per arming; the timer is disarmed when it
    /// fires.
    pub fn poll(&mut self, now: HostTime) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Returns the earlier of two optional deadlines.
#[must_use]
pub fn earliest(a: Option<HostTime>, b: Option<HostTime>) -> Option<HostTime> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut t = Timer::new();
        t.arm(HostTime::from_millis(100), Duration::from_millis(500));
        assert!(!t.poll(HostTime::from_millis(599)));
        assert!(t.poll(HostTime::from_millis(600)));
        assert!(!t.poll(HostTime::from_millis(700)), "one-shot");
        assert!(!t.is_armed());
    }

    #[test]
    fn rearm_replaces_deadline() {
        let mut t = Timer::new();
        t.arm(HostTime::from_millis(0), Duration::from_millis(250));
        t.arm(HostTime::from_millis(200), Duration::from_millis(250));
        assert!(!t.poll(HostTime::from_millis(300)));
        assert_eq!(t.deadline(), Some(HostTime::from_millis(450)));
        assert!(t.poll(HostTime::from_millis(450)));
    }

    #[test]
    fn cancel_disarms() {
        let mut t = Timer::new();
        assert!(!t.cancel());
        t.arm(HostTime(0), Duration(10));
        assert!(t.cancel());
        assert!(!t.poll(HostTime(100)));
    }

    #[test]
    fn earliest_deadline() {
        let a = Some(HostTime(10));
        let b = Some(HostTime(5));
        assert_eq!(earliest(a, b), b);
        assert_eq!(earliest(a, None), a);
        assert_eq!(earliest(None, None), None);
    }
}
