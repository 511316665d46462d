// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay: a cancellable periodic advance with pause reasons.

use bitflags::bitflags;
use tracing::trace;
use understory_timing::{TimerId, TimerQueue};

bitflags! {
    /// Reasons autoplay is currently held back.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PauseReasons: u8 {
        /// The pointer hovers the carousel.
        const HOVER = 1 << 0;
        /// A drag session is active.
        const DRAG = 1 << 1;
    }
}

/// Payload of the carousel's timers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarouselTimer {
    /// Advance to the next slide.
    Autoplay,
}

/// Periodic advance scheduler.
///
/// `armed` records that autoplay should run; the repeating timer only exists
/// while armed and not paused. Pausing keeps the armed state so that resuming
/// restores the schedule with a fresh full period.
#[derive(Clone, Debug)]
pub struct Autoplay {
    enabled: bool,
    period_ms: u64,
    armed: bool,
    paused: PauseReasons,
    timer: Option<TimerId>,
}

impl Autoplay {
    /// Creates a disarmed autoplay with the given period.
    #[must_use]
    pub fn new(enabled: bool, period_ms: u64) -> Self {
        Self {
            enabled,
            period_ms,
            armed: false,
            paused: PauseReasons::empty(),
            timer: None,
        }
    }

    /// Returns `true` if autoplay is configured on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` once armed and until disarmed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns `true` while the periodic timer is scheduled.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.timer.is_some()
    }

    /// Current pause reasons.
    #[must_use]
    pub fn paused(&self) -> PauseReasons {
        self.paused
    }

    /// Starts autoplay.
    ///
    /// No-op when already armed, disabled, or with fewer than two slides.
    pub fn arm(&mut self, timers: &mut TimerQueue<CarouselTimer>, now: u64, len: usize) {
        if self.armed || !self.enabled || len < 2 {
            return;
        }
        self.armed = true;
        self.schedule(timers, now);
    }

    /// Stops autoplay. Idempotent.
    pub fn disarm(&mut self, timers: &mut TimerQueue<CarouselTimer>) {
        self.armed = false;
        self.unschedule(timers);
    }

    /// Disarms and re-arms, restarting the full period from `now`.
    pub fn reset(&mut self, timers: &mut TimerQueue<CarouselTimer>, now: u64, len: usize) {
        self.disarm(timers);
        self.arm(timers, now, len);
    }

    /// Holds autoplay back for `reason` without disarming it.
    pub fn pause(&mut self, reason: PauseReasons, timers: &mut TimerQueue<CarouselTimer>) {
        self.paused |= reason;
        self.unschedule(timers);
    }

    /// Clears `reason`; the schedule restarts once no reason is left.
    pub fn resume(
        &mut self,
        reason: PauseReasons,
        timers: &mut TimerQueue<CarouselTimer>,
        now: u64,
        len: usize,
    ) {
        self.paused.remove(reason);
        if self.armed && len >= 2 {
            self.schedule(timers, now);
        }
    }

    fn schedule(&mut self, timers: &mut TimerQueue<CarouselTimer>, now: u64) {
        if !self.paused.is_empty() || self.timer.is_some() {
            return;
        }
        trace!(period_ms = self.period_ms, now, "autoplay scheduled");
        self.timer = Some(timers.schedule_repeating(now, self.period_ms, CarouselTimer::Autoplay));
    }

    fn unschedule(&mut self, timers: &mut TimerQueue<CarouselTimer>) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_requires_enabled_and_two_slides() {
        let mut timers = TimerQueue::new();
        let mut disabled = Autoplay::new(false, 100);
        disabled.arm(&mut timers, 0, 5);
        assert!(!disabled.is_armed());

        let mut auto = Autoplay::new(true, 100);
        auto.arm(&mut timers, 0, 1);
        assert!(!auto.is_armed());
        auto.arm(&mut timers, 0, 2);
        assert!(auto.is_scheduled());
        assert_eq!(timers.len(), 1);

        // Arming twice keeps a single schedule.
        auto.arm(&mut timers, 50, 2);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(100));
    }

    #[test]
    fn reset_restarts_the_period() {
        let mut timers = TimerQueue::new();
        let mut auto = Autoplay::new(true, 100);
        auto.arm(&mut timers, 0, 3);
        auto.reset(&mut timers, 70, 3);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(170));
    }

    #[test]
    fn pause_reasons_stack() {
        let mut timers = TimerQueue::new();
        let mut auto = Autoplay::new(true, 100);
        auto.arm(&mut timers, 0, 3);

        auto.pause(PauseReasons::HOVER, &mut timers);
        auto.pause(PauseReasons::DRAG, &mut timers);
        assert!(auto.is_armed());
        assert!(timers.is_empty());

        auto.resume(PauseReasons::DRAG, &mut timers, 10, 3);
        assert!(timers.is_empty());

        auto.resume(PauseReasons::HOVER, &mut timers, 20, 3);
        assert_eq!(timers.next_deadline(), Some(120));
    }

    #[test]
    fn reset_while_paused_waits_for_resume() {
        let mut timers = TimerQueue::new();
        let mut auto = Autoplay::new(true, 100);
        auto.arm(&mut timers, 0, 3);
        auto.pause(PauseReasons::HOVER, &mut timers);
        auto.reset(&mut timers, 10, 3);
        assert!(auto.is_armed());
        assert!(!auto.is_scheduled());
    }

    #[test]
    fn disarm_is_idempotent() {
        let mut timers = TimerQueue::new();
        let mut auto = Autoplay::new(true, 100);
        auto.arm(&mut timers, 0, 3);
        auto.disarm(&mut timers);
        auto.disarm(&mut timers);
        assert!(!auto.is_armed());
        assert!(timers.is_empty());

        // Resuming a disarmed autoplay does not schedule.
        auto.resume(PauseReasons::HOVER, &mut timers, 0, 3);
        assert!(timers.is_empty());
    }
}
