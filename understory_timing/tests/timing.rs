// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_timing` crate.
//!
//! These drive a queue and a deferred action together the way a host event
//! loop would: poll at the reported deadline, race a completion signal.

use understory_timing::{DEFAULT_MARGIN_MS, Deferred, TimerQueue};

#[derive(Clone, Debug, PartialEq)]
enum Job {
    Advance,
    Flush,
}

#[test]
fn host_loop_wakes_at_reported_deadlines() {
    let mut timers = TimerQueue::new();
    timers.schedule_repeating(0, 4_500, Job::Advance);
    timers.schedule_once(0, 1_000, Job::Flush);

    let mut fired = Vec::new();
    let mut now = 0;
    while now < 10_000 {
        let Some(deadline) = timers.next_deadline() else {
            break;
        };
        now = deadline;
        fired.extend(timers.poll(now).into_iter().map(|(_, job)| (now, job)));
    }

    assert_eq!(
        fired,
        vec![
            (1_000, Job::Flush),
            (4_500, Job::Advance),
            (9_000, Job::Advance),
            (13_500, Job::Advance),
        ]
    );
}

#[test]
fn cancelled_repeating_timer_stops_firing() {
    let mut timers = TimerQueue::new();
    let id = timers.schedule_repeating(0, 10, Job::Advance);
    assert_eq!(timers.poll(10).len(), 1);
    assert_eq!(timers.cancel(id), Some(Job::Advance));
    assert!(timers.poll(1_000).is_empty());
}

#[test]
fn deferred_runs_exactly_once_whichever_path_wins() {
    for signal_first in [true, false] {
        let mut settle = Deferred::schedule(Job::Flush, 0, 1_500, DEFAULT_MARGIN_MS);
        let mut runs = 0;
        if signal_first {
            runs += usize::from(settle.trigger().is_some());
            runs += usize::from(settle.poll(1_650).is_some());
        } else {
            runs += usize::from(settle.poll(1_650).is_some());
            runs += usize::from(settle.trigger().is_some());
        }
        assert_eq!(runs, 1, "signal_first = {signal_first}");
    }
}
