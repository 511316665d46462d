// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rejections and configuration errors.

use core::fmt;

/// Why a requested slide change was not applied.
///
/// Rejections are expected races between input and animation timing, not
/// faults. The controller logs them and reports `false` to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// A transition is already in flight.
    InFlight,
    /// The carousel has no slides.
    Empty,
    /// The request resolves to the slide that is already active.
    Unchanged,
    /// The target skips more than one wrap step past either end.
    OutOfRange {
        /// The requested target.
        target: isize,
        /// The slide count at the time of the request.
        len: usize,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InFlight => f.write_str("a slide transition is already in flight"),
            Self::Empty => f.write_str("the carousel has no slides"),
            Self::Unchanged => f.write_str("the requested slide is already active"),
            Self::OutOfRange { target, len } => write!(
                f,
                "slide target {target} is outside the wrap range -1..={len}"
            ),
        }
    }
}

impl core::error::Error for Rejection {}

/// An invalid [`CarouselConfig`](crate::CarouselConfig).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The aspect ratio is not a finite, strictly positive number.
    InvalidRatio(f64),
    /// Autoplay is enabled with a zero interval.
    ZeroAutoplayInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRatio(ratio) => {
                write!(f, "aspect ratio {ratio} must be finite and greater than zero")
            }
            Self::ZeroAutoplayInterval => {
                f.write_str("autoplay is enabled but the autoplay interval is zero")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
