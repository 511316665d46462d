// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, looping slide carousel.
//!
//! This crate owns the _behavior_ of a carousel: which slide is active, how a
//! move wraps around the ends, whether a transition is in flight, how a drag
//! turns into a slide change, and when autoplay advances. It does **not** know
//! how slides are painted. Hosts feed it input and time, read back a small view
//! model ([`TrackFrame`], [`DotState`], [`Chrome`]) and repaint when asked.
//!
//! The pieces, leaves first:
//!
//! - [`SlideMachine`]: the active index, the at-most-one-transition gate, and
//!   exactly-once settlement (renderer signal or timed fallback).
//! - [`Autoplay`]: a periodic advance that can be paused for several
//!   [`PauseReasons`] at once.
//! - [`GestureTracker`]: pointer drags as a fractional offset plus a
//!   commit/discard decision at release.
//! - [`Carousel`]: the controller tying them together, with uncontrolled and
//!   controlled (caller-owned index) modes.
//!
//! Timers come from `understory_timing`. The carousel never reads a clock;
//! pass `now` in milliseconds and call [`Carousel::tick`] at
//! [`Carousel::next_deadline`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, GestureSupport};
//!
//! let config = CarouselConfig::new().with_transition_duration_ms(300);
//! let mut carousel = Carousel::mount(config, 4, GestureSupport::Unavailable, 0);
//!
//! // Going back from the first slide wraps by a single step.
//! assert!(carousel.previous(0));
//! assert_eq!(carousel.transition_shift(), -1);
//!
//! // Requests during the transition are dropped.
//! assert!(!carousel.next(10));
//!
//! // The renderer reports the end of its transition.
//! carousel.transition_finished(300);
//! assert_eq!(carousel.active_index(), 3);
//!
//! let changes: Vec<_> = carousel
//!     .drain_events()
//!     .filter_map(|e| match e {
//!         CarouselEvent::SlideChange(i) => Some(i),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(changes, vec![3]);
//! ```
//!
//! ## Controlled mode
//!
//! With [`CarouselConfig::active_slide`] set, navigation only _reports_ the
//! wanted slide through [`CarouselEvent::SlideChange`]. The caller decides and
//! answers with [`Carousel::on_external_index_update`], which animates to the
//! new index.
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, GestureSupport};
//!
//! let config = CarouselConfig::new().with_active_slide(0);
//! let mut carousel = Carousel::mount(config, 3, GestureSupport::Unavailable, 0);
//!
//! carousel.next(0);
//! assert_eq!(carousel.active_index(), 0);
//! assert!(carousel.drain_events().any(|e| e == CarouselEvent::SlideChange(1)));
//!
//! carousel.on_external_index_update(1, 5);
//! carousel.transition_finished(1_505);
//! assert_eq!(carousel.active_index(), 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`CarouselConfig`] (kebab-case keys,
//!   missing keys take their defaults).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoplay;
mod carousel;
mod chrome;
mod config;
mod error;
mod gesture;
mod machine;
mod track;

pub use autoplay::{Autoplay, CarouselTimer, PauseReasons};
pub use carousel::{Carousel, CarouselEvent, GestureSupport, NavKey, RecognizedGesture};
pub use chrome::{Arrows, CarouselChrome, Chrome, DefaultChrome};
pub use config::CarouselConfig;
pub use error::{ConfigError, Rejection};
pub use gesture::{DragRelease, GestureSession, GestureTracker, PointerKind};
pub use machine::{Change, ChangeOrigin, SlideMachine};
pub use track::{DotState, SlotKind, TrackFrame, TrackSlot, track_slots};
