// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide-index state machine: wraparound, the in-flight gate, and settlement.

use understory_timing::Deferred;

use crate::Rejection;

/// Where a slide change request came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Arrows, dots, keyboard or an imperative call.
    User,
    /// A committed drag or a recognized swipe.
    Gesture,
    /// The autoplay timer.
    Autoplay,
    /// The caller supplied a new controlled index.
    External,
}

/// An accepted slide change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Change {
    /// Active slide when the request was made.
    pub from: usize,
    /// Slide that becomes active once the transition settles.
    pub to: usize,
    /// Signed slide-width distance of the transition.
    ///
    /// Wrapping past either end is always a single step in the requested
    /// direction.
    pub shift: isize,
    /// The change should be reported to slide-change observers.
    pub notify: bool,
    /// A transition was started. `false` for a controlled-mode request that
    /// only reports the wanted index and waits for the caller.
    pub committed: bool,
    /// The transition settled synchronously (zero transition duration).
    pub settled: bool,
}

/// A controlled-mode request the caller has not answered yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Request {
    pub(crate) index: usize,
    pub(crate) target: isize,
}

/// The authoritative owner of the active slide.
///
/// `transition_shift` is non-zero exactly while a transition is in flight, and
/// every new request is rejected until the transition settles. Settlement is
/// driven either by [`SlideMachine::finish_transition`] (the renderer reported
/// the end of its transition) or by [`SlideMachine::poll`] once the transition
/// duration plus a margin elapsed; whichever comes first commits the index and
/// the other becomes a no-op.
#[derive(Clone, Debug)]
pub struct SlideMachine {
    len: usize,
    active: usize,
    shift: isize,
    controlled: bool,
    request: Option<Request>,
    settle: Deferred<usize>,
    duration_ms: u64,
    margin_ms: u64,
}

impl SlideMachine {
    /// Creates a settled machine over `len` slides.
    ///
    /// `initial` is clamped into range.
    #[must_use]
    pub fn new(len: usize, initial: usize, controlled: bool) -> Self {
        Self {
            len,
            active: clamp_index(initial, len),
            shift: 0,
            controlled,
            request: None,
            settle: Deferred::idle(),
            duration_ms: 0,
            margin_ms: 0,
        }
    }

    /// Sets the transition duration and the settlement fallback margin.
    #[must_use]
    pub fn with_timing(mut self, duration_ms: u64, margin_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self.margin_ms = margin_ms;
        self
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The committed active slide (`0` when empty).
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Signed distance of the in-flight transition, `0` when settled.
    #[must_use]
    pub fn transition_shift(&self) -> isize {
        self.shift
    }

    /// Returns `true` when no transition is in flight.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.shift == 0
    }

    /// Slide the in-flight transition will settle on.
    #[must_use]
    pub fn pending_target(&self) -> Option<usize> {
        self.settle.peek().copied()
    }

    /// Deadline of the settlement fallback.
    #[must_use]
    pub fn settle_deadline(&self) -> Option<u64> {
        self.settle.deadline()
    }

    /// Returns `true` when the caller owns the active index.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Index of an unanswered controlled-mode request.
    #[must_use]
    pub fn requested(&self) -> Option<usize> {
        self.request.map(|r| r.index)
    }

    pub(crate) fn take_request(&mut self) -> Option<Request> {
        self.request.take()
    }

    /// Checks a target without changing any state.
    ///
    /// Valid targets are `-1..=len`: `-1` and `len` are the one-step wraps
    /// past either end.
    pub fn resolve(&self, target: isize) -> Result<(usize, isize), Rejection> {
        if self.shift != 0 {
            return Err(Rejection::InFlight);
        }
        if self.len == 0 {
            return Err(Rejection::Empty);
        }
        let len = self.len as isize;
        if target < -1 || target > len {
            return Err(Rejection::OutOfRange {
                target,
                len: self.len,
            });
        }
        let wrapped = target.rem_euclid(len) as usize;
        if wrapped == self.active {
            return Err(Rejection::Unchanged);
        }
        let shift = if target < 0 {
            -1
        } else if target >= len {
            1
        } else {
            target - self.active as isize
        };
        Ok((wrapped, shift))
    }

    /// Requests a move towards `target`.
    ///
    /// In uncontrolled mode, or when `force` is set, an accepted request starts
    /// a transition and schedules its settlement at `now`. In controlled mode
    /// without `force` the request is only recorded and reported; the caller is
    /// expected to answer with a new controlled index.
    ///
    /// Notification is suppressed for [`ChangeOrigin::External`] requests and
    /// for autoplay requests while an earlier controlled-mode request is still
    /// unanswered.
    pub fn request_change(
        &mut self,
        target: isize,
        origin: ChangeOrigin,
        force: bool,
        now: u64,
    ) -> Result<Change, Rejection> {
        let (to, shift) = self.resolve(target)?;
        let from = self.active;
        let notify = match origin {
            ChangeOrigin::External => false,
            ChangeOrigin::Autoplay => !(self.controlled && self.request.is_some()),
            ChangeOrigin::User | ChangeOrigin::Gesture => true,
        };
        let committed = force || !self.controlled;
        let mut settled = false;
        if committed {
            self.request = None;
            if self.duration_ms == 0 {
                self.active = to;
                settled = true;
            } else {
                self.shift = shift;
                self.settle.reschedule(to, now, self.duration_ms, self.margin_ms);
            }
        } else {
            self.request = Some(Request { index: to, target });
        }
        Ok(Change {
            from,
            to,
            shift,
            notify,
            committed,
            settled,
        })
    }

    /// The renderer reported that the transition finished.
    ///
    /// Returns the committed slide, or `None` if nothing was in flight.
    pub fn finish_transition(&mut self) -> Option<usize> {
        let to = self.settle.trigger()?;
        Some(self.commit(to))
    }

    /// Settles the in-flight transition if its fallback deadline elapsed.
    pub fn poll(&mut self, now: u64) -> Option<usize> {
        let to = self.settle.poll(now)?;
        Some(self.commit(to))
    }

    /// Drops an in-flight transition without moving the active slide.
    pub fn cancel_transition(&mut self) {
        self.settle.cancel();
        self.shift = 0;
    }

    /// Adapts to a new slide count.
    ///
    /// An active (or pending) slide that no longer exists is clamped to the
    /// new last slide, and an in-flight shift is recomputed so it still lands
    /// on the track. A transition whose target collapses onto the active slide
    /// is dropped. With no slides left the machine resets to `0` and drops any
    /// transition. Returns `true` if the active slide moved.
    pub fn set_len(&mut self, len: usize) -> bool {
        self.len = len;
        if len == 0 {
            self.cancel_transition();
            self.request = None;
            let moved = self.active != 0;
            self.active = 0;
            return moved;
        }
        let last = len - 1;
        let active = self.active.min(last);
        if let Some(pending) = self.settle.peek_mut() {
            // A wrap moves against the order of the two indices.
            let wrapped = (self.shift > 0) != (*pending > self.active);
            *pending = (*pending).min(last);
            self.shift = if *pending == active {
                0
            } else if wrapped {
                self.shift.signum()
            } else {
                *pending as isize - active as isize
            };
        }
        if self.shift == 0 {
            self.settle.cancel();
        }
        // Wrap targets follow the new ends; a wrap that no longer crosses one
        // becomes a direct move.
        self.request = self.request.filter(|r| r.index < len).map(|r| {
            let target = if r.target < 0 && r.index != last {
                r.index as isize
            } else if r.target > r.index as isize {
                len as isize
            } else {
                r.target
            };
            Request { target, ..r }
        });
        let moved = self.active != active;
        self.active = active;
        moved
    }

    fn commit(&mut self, to: usize) -> usize {
        self.shift = 0;
        self.active = clamp_index(to, self.len);
        self.active
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}
