// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! UI widgets often need "do this later" behavior: advance a slideshow every few
//! seconds, or commit an animation even if the renderer never reports that it
//! finished. This crate models that bookkeeping without owning a clock, a thread,
//! or an event loop. The host passes the current time (milliseconds on any
//! monotonic clock) into every call and decides when to wake up again by asking
//! for the next deadline.
//!
//! - [`TimerQueue`]: one-shot and repeating timers keyed by [`TimerId`], polled
//!   with the current time.
//! - [`Deferred`]: a single pending action that runs **exactly once**, either
//!   early through [`Deferred::trigger`] (the primary signal arrived) or late
//!   through [`Deferred::poll`] (the fallback deadline elapsed).
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let tick = timers.schedule_repeating(0, 100, "tick");
//! timers.schedule_once(0, 250, "done");
//!
//! assert_eq!(timers.next_deadline(), Some(100));
//! assert_eq!(timers.poll(100), vec![(tick, "tick")]);
//!
//! // Both timers are due by 300; repeating timers fire once per poll.
//! let fired: Vec<_> = timers.poll(300).into_iter().map(|(_, p)| p).collect();
//! assert_eq!(fired, vec!["tick", "done"]);
//! assert_eq!(timers.next_deadline(), Some(400));
//! ```
//!
//! ## Racing a completion signal
//!
//! ```rust
//! use understory_timing::{DEFAULT_MARGIN_MS, Deferred};
//!
//! let mut settle = Deferred::schedule("commit", 0, 1_500, DEFAULT_MARGIN_MS);
//!
//! // The renderer reported completion before the fallback deadline.
//! assert_eq!(settle.trigger(), Some("commit"));
//!
//! // The fallback can no longer run the action a second time.
//! assert_eq!(settle.poll(10_000), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod deferred;
mod queue;

pub use deferred::{DEFAULT_MARGIN_MS, Deferred};
pub use queue::{TimerId, TimerQueue};
