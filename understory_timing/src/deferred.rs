// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exactly-once deferred action racing a primary completion signal.

/// Default slack added on top of the expected delay before the fallback fires.
pub const DEFAULT_MARGIN_MS: u64 = 150;

/// A pending action that runs exactly once.
///
/// `Deferred` holds a payload describing the action together with a fallback
/// deadline. The action is handed out by whichever path reaches it first:
///
/// - [`Deferred::trigger`]: the primary signal arrived (for example a
///   transition-end event); the fallback is cleared.
/// - [`Deferred::poll`]: the fallback deadline (`now + delay + margin` at
///   scheduling time) elapsed without the primary signal.
///
/// Once the payload has been taken every path returns `None`, so callers can
/// wire both paths unconditionally.
#[derive(Clone, Debug)]
pub struct Deferred<T> {
    pending: Option<T>,
    deadline: u64,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> Deferred<T> {
    /// Creates a deferred action with nothing pending.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            pending: None,
            deadline: 0,
        }
    }

    /// Schedules `payload` with a fallback at `now + delay + margin`.
    #[must_use]
    pub fn schedule(payload: T, now: u64, delay: u64, margin: u64) -> Self {
        Self {
            pending: Some(payload),
            deadline: now.saturating_add(delay).saturating_add(margin),
        }
    }

    /// Replaces any pending action, returning the one that was dropped.
    pub fn reschedule(&mut self, payload: T, now: u64, delay: u64, margin: u64) -> Option<T> {
        let previous = self.pending.replace(payload);
        self.deadline = now.saturating_add(delay).saturating_add(margin);
        previous
    }

    /// Takes the pending action early, because the primary signal fired.
    pub fn trigger(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Takes the pending action if its fallback deadline elapsed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        if now >= self.deadline {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending action without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Returns `true` while the action has not run or been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the fallback deadline while pending.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|_| self.deadline)
    }

    /// Returns the pending payload without taking it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Returns the pending payload mutably without taking it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.pending.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_fires_after_delay_plus_margin() {
        let mut d = Deferred::schedule(1, 100, 50, 10);
        assert_eq!(d.deadline(), Some(160));
        assert_eq!(d.poll(159), None);
        assert_eq!(d.poll(160), Some(1));
        assert_eq!(d.poll(200), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn trigger_wins_over_fallback() {
        let mut d = Deferred::schedule((), 0, 10, 0);
        assert_eq!(d.trigger(), Some(()));
        assert_eq!(d.poll(1_000), None);
        assert_eq!(d.trigger(), None);
    }

    #[test]
    fn fallback_wins_over_late_trigger() {
        let mut d = Deferred::schedule('x', 0, 10, 0);
        assert_eq!(d.poll(10), Some('x'));
        assert_eq!(d.trigger(), None);
    }

    #[test]
    fn cancel_discards() {
        let mut d = Deferred::schedule(3, 0, 10, 0);
        assert_eq!(d.cancel(), Some(3));
        assert_eq!(d.deadline(), None);
        assert_eq!(d.poll(100), None);
    }

    #[test]
    fn reschedule_replaces_pending() {
        let mut d = Deferred::idle();
        assert_eq!(d.reschedule(1, 0, 10, 0), None);
        assert_eq!(d.reschedule(2, 5, 10, 0), Some(1));
        assert_eq!(d.poll(14), None);
        assert_eq!(d.poll(15), Some(2));
    }
}
