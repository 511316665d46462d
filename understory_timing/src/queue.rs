// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer queue: one-shot and repeating deadlines polled with host time.

use alloc::vec::Vec;

/// Identifier for a timer scheduled in a [`TimerQueue`].
///
/// Identifiers are never reused by the queue that issued them, so a stale id
/// can be cancelled safely: it simply no longer matches anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw sequence number of this id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    period: Option<u64>,
    payload: T,
}

/// A small queue of pending timers.
///
/// The queue does not read a clock. Callers pass `now` (milliseconds on any
/// monotonic clock) when scheduling and when polling, and may use
/// [`TimerQueue::next_deadline`] to decide when to poll next.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to fire once, `delay` milliseconds after `now`.
    pub fn schedule_once(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.push(now.saturating_add(delay), None, payload)
    }

    /// Schedules `payload` to fire every `period` milliseconds, starting at `now + period`.
    ///
    /// A zero period is treated as one millisecond.
    pub fn schedule_repeating(&mut self, now: u64, period: u64, payload: T) -> TimerId {
        let period = period.max(1);
        self.push(now.saturating_add(period), Some(period), payload)
    }

    /// Cancels a timer, returning its payload if it was still scheduled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx).payload)
    }

    /// Returns `true` if `id` is still scheduled.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the deadline of `id`, if it is still scheduled.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.deadline)
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Returns the number of scheduled timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels every timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn push(&mut self, deadline: u64, period: Option<u64>, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            period,
            payload,
        });
        id
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Fires every timer whose deadline is at or before `now`.
    ///
    /// Fired timers are returned in deadline order, ties broken by scheduling
    /// order. One-shot timers are removed. Repeating timers fire at most once per
    /// call: missed periods are coalesced and the timer is rescheduled to the
    /// first period boundary strictly after `now`.
    pub fn poll(&mut self, now: u64) -> Vec<(TimerId, T)> {
        let mut due: Vec<(u64, TimerId, T)> = Vec::new();
        let mut idx = 0;
        while idx < self.entries.len() {
            let entry = &mut self.entries[idx];
            if entry.deadline > now {
                idx += 1;
                continue;
            }
            let period = entry.period;
            match period {
                Some(period) => {
                    due.push((entry.deadline, entry.id, entry.payload.clone()));
                    let missed = (now - entry.deadline) / period;
                    entry.deadline = entry
                        .deadline
                        .saturating_add(period.saturating_mul(missed + 1));
                    idx += 1;
                }
                None => {
                    let entry = self.entries.remove(idx);
                    due.push((entry.deadline, entry.id, entry.payload));
                }
            }
        }
        due.sort_by_key(|(deadline, id, _)| (*deadline, *id));
        due.into_iter().map(|(_, id, payload)| (id, payload)).collect()
    }
}
