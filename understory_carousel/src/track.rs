// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-facing view of the carousel track.
//!
//! The track lays out `len + 2` slots: a copy of the last slide, every slide in
//! order, and a copy of the first slide. Wrapping past either end animates
//! onto a copy, and settlement jumps (without animation) to the real slide.

/// Role of a slot on the track.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlotKind {
    /// Copy of the last slide placed before the first one.
    LeadingClone,
    /// A slide at its own position.
    Slide,
    /// Copy of the first slide placed after the last one.
    TrailingClone,
}

/// One slot of the track.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrackSlot {
    /// Slide shown in this slot.
    pub slide: usize,
    /// Whether the slot is a copy.
    pub kind: SlotKind,
}

/// Enumerates the slots of a track over `len` slides.
///
/// Empty when `len` is zero.
pub fn track_slots(len: usize) -> impl Iterator<Item = TrackSlot> {
    let edges = if len == 0 { 0 } else { 1 };
    let leading = (0..edges).map(move |_| TrackSlot {
        slide: len - 1,
        kind: SlotKind::LeadingClone,
    });
    let slides = (0..len).map(|slide| TrackSlot {
        slide,
        kind: SlotKind::Slide,
    });
    let trailing = (0..edges).map(|_| TrackSlot {
        slide: 0,
        kind: SlotKind::TrailingClone,
    });
    leading.chain(slides).chain(trailing)
}

/// Where the renderer should place the track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackFrame {
    /// Track translation in slide widths; negative moves content left.
    pub offset: f64,
    /// Animate towards `offset` over `duration_ms`; otherwise jump.
    pub animate: bool,
    /// Transition duration in milliseconds.
    pub duration_ms: u64,
}

impl TrackFrame {
    /// Computes the frame for a settled index, an in-flight shift and a drag offset.
    #[must_use]
    pub fn new(
        len: usize,
        active: usize,
        shift: isize,
        drag_offset: f64,
        duration_ms: u64,
    ) -> Self {
        if len == 0 {
            return Self {
                offset: 0.0,
                animate: false,
                duration_ms,
            };
        }
        let slot = (active + 1) as f64 + shift as f64;
        Self {
            offset: drag_offset - slot,
            animate: shift != 0,
            duration_ms,
        }
    }

    /// Track translation in pixels for a given slide width.
    #[must_use]
    pub fn offset_px(&self, slide_width: f64) -> f64 {
        self.offset * slide_width
    }
}

/// State of one navigation dot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DotState {
    /// Slide the dot navigates to.
    pub index: usize,
    /// The slide is active and settled.
    pub active: bool,
}
