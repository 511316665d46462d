// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-swipe tracking.
//!
//! ## Usage
//!
//! 1) Start a session with [`GestureTracker::begin`], passing the pointer
//!    position and the measured track width.
//! 2) Feed moves into [`GestureTracker::update`] to get the fractional drag
//!    offset used for rendering.
//! 3) Finish with [`GestureTracker::end`]: drags past half the track width
//!    commit a one-slide move, shorter drags are discarded.
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::{DragRelease, GestureTracker, PointerKind};
//!
//! let mut drag = GestureTracker::default();
//! assert!(drag.begin(PointerKind::Mouse, Point::new(500.0, 0.0), 1_000.0));
//!
//! // Dragging left by 600px reveals the next slide.
//! assert_eq!(drag.update(Point::new(-100.0, 0.0), true), Some(-0.6));
//! assert_eq!(drag.end(Point::new(-100.0, 0.0)), Some(DragRelease::Next));
//! assert_eq!(drag.offset(), 0.0);
//! ```

use kurbo::Point;

/// Kind of pointer driving a drag session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse or pen.
    Mouse,
    /// Touch contact or a recognized pan.
    Touch,
}

/// What a released drag asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragRelease {
    /// Dragged right past the threshold: show the previous slide.
    Previous,
    /// Dragged left past the threshold: show the next slide.
    Next,
    /// Too short: snap back.
    Discard,
}

/// One drag, from pointer-down to release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureSession {
    /// Pointer that started the session.
    pub kind: PointerKind,
    /// Position at pointer-down.
    pub anchor: Point,
    /// Track width measured at pointer-down.
    pub track_width: f64,
}

impl GestureSession {
    /// Horizontal displacement from the anchor.
    #[must_use]
    pub fn displacement(&self, pos: Point) -> f64 {
        pos.x - self.anchor.x
    }

    /// Classifies a release at `pos`.
    #[must_use]
    pub fn release(&self, pos: Point) -> DragRelease {
        let dx = self.displacement(pos);
        if dx.abs() <= self.track_width * 0.5 {
            DragRelease::Discard
        } else if dx > 0.0 {
            DragRelease::Previous
        } else {
            DragRelease::Next
        }
    }
}

/// Tracks the single active drag session of a carousel.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    session: Option<GestureSession>,
    offset: f64,
}

impl GestureTracker {
    /// Starts a session. Returns `false` if one is already active or the
    /// track has no usable width.
    pub fn begin(&mut self, kind: PointerKind, anchor: Point, track_width: f64) -> bool {
        if self.session.is_some() || track_width <= 0.0 || !track_width.is_finite() {
            return false;
        }
        self.session = Some(GestureSession {
            kind,
            anchor,
            track_width,
        });
        self.offset = 0.0;
        true
    }

    /// Updates the drag offset from a pointer move.
    ///
    /// The offset only follows the pointer while `may_move` is set (no slide
    /// transition in flight). Returns the new offset, or `None` when no session
    /// is active or the offset was held.
    pub fn update(&mut self, pos: Point, may_move: bool) -> Option<f64> {
        let session = self.session?;
        if !may_move {
            return None;
        }
        self.offset = session.displacement(pos) / session.track_width;
        Some(self.offset)
    }

    /// Ends the session at `pos`, resetting the offset.
    pub fn end(&mut self, pos: Point) -> Option<DragRelease> {
        let session = self.session.take()?;
        self.offset = 0.0;
        Some(session.release(pos))
    }

    /// Abandons the session without a decision.
    pub fn cancel(&mut self) -> bool {
        self.offset = 0.0;
        self.session.take().is_some()
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Current fractional drag offset (positive when dragged right).
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_at(x: f64) -> GestureTracker {
        let mut t = GestureTracker::default();
        assert!(t.begin(PointerKind::Touch, Point::new(x, 10.0), 200.0));
        t
    }

    #[test]
    fn only_one_session_at_a_time() {
        let mut t = tracker_at(0.0);
        assert!(!t.begin(PointerKind::Mouse, Point::ZERO, 200.0));
        assert_eq!(t.session().map(|s| s.kind), Some(PointerKind::Touch));
    }

    #[test]
    fn zero_width_is_refused() {
        let mut t = GestureTracker::default();
        assert!(!t.begin(PointerKind::Mouse, Point::ZERO, 0.0));
        assert!(!t.begin(PointerKind::Mouse, Point::ZERO, f64::NAN));
        assert!(!t.is_active());
    }

    #[test]
    fn offset_is_fraction_of_track_width() {
        let mut t = tracker_at(100.0);
        assert_eq!(t.update(Point::new(150.0, 40.0), true), Some(0.25));
        assert_eq!(t.offset(), 0.25);
    }

    #[test]
    fn offset_is_held_during_transition() {
        let mut t = tracker_at(100.0);
        t.update(Point::new(120.0, 0.0), true);
        assert_eq!(t.update(Point::new(180.0, 0.0), false), None);
        assert_eq!(t.offset(), 0.1);
    }

    #[test]
    fn release_direction_and_threshold() {
        assert_eq!(
            tracker_at(0.0).end(Point::new(120.0, 0.0)),
            Some(DragRelease::Previous)
        );
        assert_eq!(
            tracker_at(0.0).end(Point::new(-120.0, 0.0)),
            Some(DragRelease::Next)
        );
        // Exactly half is not enough.
        assert_eq!(
            tracker_at(0.0).end(Point::new(100.0, 0.0)),
            Some(DragRelease::Discard)
        );
        assert_eq!(
            tracker_at(0.0).end(Point::new(20.0, 0.0)),
            Some(DragRelease::Discard)
        );
    }

    #[test]
    fn end_without_session_is_none() {
        let mut t = GestureTracker::default();
        assert_eq!(t.end(Point::ZERO), None);
        assert!(!t.cancel());
    }
}
