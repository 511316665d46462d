// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.

use kurbo::Point;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};
use understory_timing::TimerQueue;

use crate::{
    Autoplay, CarouselChrome, CarouselConfig, CarouselTimer, ChangeOrigin, Chrome, DotState,
    DragRelease, GestureTracker, PauseReasons, PointerKind, Rejection, SlideMachine, TrackFrame,
    TrackSlot, track_slots,
};

/// Notification produced by the controller, drained with [`Carousel::drain_events`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The active slide changed, or in controlled mode a change was requested.
    SlideChange(usize),
    /// A transition started.
    TransitionStarted {
        /// Slide shown before the transition.
        from: usize,
        /// Slide the transition settles on.
        to: usize,
        /// Signed slide-width distance.
        shift: isize,
    },
    /// A transition settled on this slide.
    TransitionSettled(usize),
    /// The view model changed; the host should re-read it and repaint.
    Repaint,
}

/// Whether the host offers a touch-gesture recognizer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GestureSupport {
    /// No recognizer; recognized gestures are ignored.
    #[default]
    Unavailable,
    /// Swipes and pans from the host recognizer are bound.
    Available,
}

/// A gesture reported by the host's touch recognizer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RecognizedGesture {
    /// Swipe towards the left: next slide.
    SwipeLeft,
    /// Swipe towards the right: previous slide.
    SwipeRight,
    /// A pan started at `pos` over a track of `track_width`.
    PanStart {
        /// Pointer position.
        pos: Point,
        /// Measured track width.
        track_width: f64,
    },
    /// The pan moved.
    PanMove(Point),
    /// The pan ended.
    PanEnd(Point),
}

/// Keyboard navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// Show the previous slide.
    Previous,
    /// Show the next slide.
    Next,
}

/// A looping carousel over a caller-owned set of slides.
///
/// The controller owns the active index (unless controlled), the autoplay
/// timer, the settlement fallback and the drag session. It never reads a
/// clock: every entry point that may touch a timer takes `now` in
/// milliseconds, and the host calls [`Carousel::tick`] at
/// [`Carousel::next_deadline`].
#[derive(Debug)]
pub struct Carousel {
    config: CarouselConfig,
    machine: SlideMachine,
    autoplay: Autoplay,
    timers: TimerQueue<CarouselTimer>,
    gesture: GestureTracker,
    support: GestureSupport,
    external: Option<usize>,
    events: SmallVec<[CarouselEvent; 4]>,
    mounted: bool,
}

impl Carousel {
    /// Mounts a carousel over `len` slides at time `now`.
    ///
    /// The initial slide is the controlled `active_slide` if set, otherwise
    /// `default_active_slide`; out-of-range values are clamped. Autoplay is
    /// armed when enabled and there are at least two slides.
    #[must_use]
    pub fn mount(config: CarouselConfig, len: usize, support: GestureSupport, now: u64) -> Self {
        if let Err(err) = config.validate() {
            warn!(%err, "carousel mounted with invalid configuration");
        }
        let controlled = config.is_controlled();
        let initial = config.active_slide.unwrap_or(config.default_active_slide);
        if len > 0 && initial >= len {
            warn!(initial, len, "initial slide out of range; clamping");
        }
        let machine = SlideMachine::new(len, initial, controlled)
            .with_timing(config.transition_duration_ms, config.settle_margin_ms);
        let mut carousel = Self {
            autoplay: Autoplay::new(config.autoplay, config.autoplay_period_ms()),
            external: config.active_slide,
            config,
            machine,
            timers: TimerQueue::new(),
            gesture: GestureTracker::default(),
            support,
            events: SmallVec::new(),
            mounted: true,
        };
        carousel.autoplay.arm(&mut carousel.timers, now, len);
        carousel
    }

    /// Tears the carousel down.
    ///
    /// Cancels autoplay, the settlement fallback and any drag session. Every
    /// later call is a no-op. Calling it twice is harmless.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.autoplay.disarm(&mut self.timers);
        self.timers.clear();
        self.machine.cancel_transition();
        self.gesture.cancel();
        self.events.clear();
        trace!("carousel unmounted");
    }

    /// Returns `true` until [`Carousel::unmount`].
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The options the carousel was mounted with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.machine.len()
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.machine.is_empty()
    }

    /// The committed active slide.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.machine.active()
    }

    /// Signed distance of the in-flight transition, `0` when settled.
    #[must_use]
    pub fn transition_shift(&self) -> isize {
        self.machine.transition_shift()
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        !self.machine.is_settled()
    }

    /// Current drag offset in track widths.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.gesture.offset()
    }

    /// Returns `true` when the caller owns the active index.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.machine.is_controlled()
    }

    /// The slide-index state machine.
    #[must_use]
    pub fn machine(&self) -> &SlideMachine {
        &self.machine
    }

    /// The autoplay state.
    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// The drag tracker.
    #[must_use]
    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Earliest time at which [`Carousel::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.timers.next_deadline(), self.machine.settle_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Takes every pending notification, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = CarouselEvent> + '_ {
        self.events.drain(..)
    }

    /// Shows the next slide, wrapping after the last one.
    ///
    /// Restarts the autoplay period. Returns `true` if the request was
    /// accepted (started, or reported in controlled mode).
    pub fn next(&mut self, now: u64) -> bool {
        self.step(1, ChangeOrigin::User, now)
    }

    /// Shows the previous slide, wrapping before the first one.
    pub fn previous(&mut self, now: u64) -> bool {
        self.step(-1, ChangeOrigin::User, now)
    }

    /// Shows slide `index`.
    ///
    /// Indices past the last slide are logged and ignored.
    pub fn go_to(&mut self, index: usize, now: u64) -> bool {
        if !self.mounted {
            return false;
        }
        self.reset_autoplay(now);
        if index >= self.len() {
            warn!(index, len = self.len(), "go_to past the last slide ignored");
            return false;
        }
        self.navigate(index as isize, ChangeOrigin::User, now)
    }

    /// Maps keyboard navigation onto [`Carousel::previous`] / [`Carousel::next`].
    pub fn handle_key(&mut self, key: NavKey, now: u64) -> bool {
        match key {
            NavKey::Previous => self.previous(now),
            NavKey::Next => self.next(now),
        }
    }

    /// Advances timers: forced settlement first, then autoplay.
    pub fn tick(&mut self, now: u64) {
        if !self.mounted {
            return;
        }
        if let Some(index) = self.machine.poll(now) {
            trace!(index, "transition settled by fallback");
            self.settled(index, now);
        }
        for (_, timer) in self.timers.poll(now) {
            match timer {
                CarouselTimer::Autoplay => {
                    let target = self.machine.active() as isize + 1;
                    self.navigate(target, ChangeOrigin::Autoplay, now);
                }
            }
        }
    }

    /// The renderer finished animating the track.
    pub fn transition_finished(&mut self, now: u64) {
        if !self.mounted {
            return;
        }
        if let Some(index) = self.machine.finish_transition() {
            trace!(index, "transition settled");
            self.settled(index, now);
        }
    }

    /// The caller's slide set now has `len` slides.
    ///
    /// A removed active slide is clamped to the new last slide. With no
    /// slides left the index resets to `0` and navigation is a no-op until
    /// slides reappear. Autoplay follows the two-slide minimum.
    pub fn on_slide_set_changed(&mut self, len: usize, now: u64) {
        if !self.mounted || len == self.len() {
            return;
        }
        if self.machine.set_len(len) {
            let active = self.machine.active();
            warn!(active, len, "active slide removed; clamped");
        }
        if len == 0 {
            self.gesture.cancel();
        }
        if self.external.is_some_and(|index| index >= len) {
            debug!(len, "controlled slide removed; waiting for a new index");
            self.external = None;
        }
        if len < 2 {
            self.autoplay.disarm(&mut self.timers);
        } else {
            self.autoplay.arm(&mut self.timers, now, len);
        }
        let active = self.machine.active();
        if self.machine.is_settled() && self.external.is_some_and(|index| index != active) {
            self.sync_external(now);
        }
        self.events.push(CarouselEvent::Repaint);
    }

    /// The caller supplied a new controlled index.
    ///
    /// While a transition is in flight the value is remembered and applied
    /// after settlement (last write wins). Ignored in uncontrolled mode, where
    /// [`Carousel::go_to`] moves the carousel.
    pub fn on_external_index_update(&mut self, index: usize, now: u64) -> bool {
        if !self.mounted {
            return false;
        }
        if !self.machine.is_controlled() {
            debug!(index, "controlled slide update ignored in uncontrolled mode");
            return false;
        }
        if index >= self.len() {
            warn!(index, len = self.len(), "controlled slide out of range ignored");
            return false;
        }
        self.external = Some(index);
        if self.machine.is_settled() {
            self.sync_external(now)
        } else {
            false
        }
    }

    /// The pointer entered the carousel.
    pub fn pointer_enter(&mut self, now: u64) {
        if self.mounted && self.pauses_on_hover() {
            trace!(now, "autoplay paused on hover");
            self.autoplay.pause(PauseReasons::HOVER, &mut self.timers);
        }
    }

    /// The pointer left the carousel.
    pub fn pointer_leave(&mut self, now: u64) {
        if self.mounted && self.pauses_on_hover() {
            let len = self.len();
            self.autoplay.resume(PauseReasons::HOVER, &mut self.timers, now, len);
        }
    }

    /// Starts a drag session.
    ///
    /// Refused when the pointer kind is disabled or a session is already
    /// active. Pauses autoplay for the duration of the drag.
    pub fn pointer_down(
        &mut self,
        kind: PointerKind,
        pos: Point,
        track_width: f64,
        now: u64,
    ) -> bool {
        if !self.mounted || !self.accepts(kind) {
            return false;
        }
        if !self.gesture.begin(kind, pos, track_width) {
            return false;
        }
        trace!(?kind, now, "drag session started");
        self.autoplay.pause(PauseReasons::DRAG, &mut self.timers);
        true
    }

    /// Moves the active drag session.
    pub fn pointer_move(&mut self, pos: Point) {
        if !self.mounted {
            return;
        }
        let may_move = self.machine.is_settled();
        if self.gesture.update(pos, may_move).is_some() {
            self.events.push(CarouselEvent::Repaint);
        }
    }

    /// Releases the active drag session at `pos`.
    ///
    /// Drags past half the track width commit a one-slide move; shorter drags
    /// snap back. Autoplay resumes either way.
    pub fn pointer_up(&mut self, pos: Point, now: u64) -> Option<DragRelease> {
        if !self.mounted {
            return None;
        }
        let release = self.gesture.end(pos)?;
        let len = self.len();
        self.autoplay.resume(PauseReasons::DRAG, &mut self.timers, now, len);
        match release {
            DragRelease::Previous => {
                self.step(-1, ChangeOrigin::Gesture, now);
            }
            DragRelease::Next => {
                self.step(1, ChangeOrigin::Gesture, now);
            }
            DragRelease::Discard => {
                debug!("drag below threshold discarded");
            }
        }
        self.events.push(CarouselEvent::Repaint);
        Some(release)
    }

    /// Abandons the active drag session without navigating.
    pub fn pointer_cancel(&mut self, now: u64) {
        if !self.mounted || !self.gesture.cancel() {
            return;
        }
        let len = self.len();
        self.autoplay.resume(PauseReasons::DRAG, &mut self.timers, now, len);
        self.events.push(CarouselEvent::Repaint);
    }

    /// Handles a gesture from the host recognizer.
    ///
    /// Ignored (returns `false`) without a recognizer or with touch disabled.
    pub fn handle_recognized(&mut self, gesture: RecognizedGesture, now: u64) -> bool {
        if self.support == GestureSupport::Unavailable || self.config.disable_touch {
            return false;
        }
        match gesture {
            RecognizedGesture::SwipeLeft => self.step(1, ChangeOrigin::Gesture, now),
            RecognizedGesture::SwipeRight => self.step(-1, ChangeOrigin::Gesture, now),
            RecognizedGesture::PanStart { pos, track_width } => {
                self.pointer_down(PointerKind::Touch, pos, track_width, now)
            }
            RecognizedGesture::PanMove(pos) => {
                self.pointer_move(pos);
                self.gesture.is_active()
            }
            RecognizedGesture::PanEnd(pos) => self.pointer_up(pos, now).is_some(),
        }
    }

    /// Where the renderer should place the track right now.
    #[must_use]
    pub fn frame(&self) -> TrackFrame {
        TrackFrame::new(
            self.len(),
            self.machine.active(),
            self.machine.transition_shift(),
            self.gesture.offset(),
            self.config.transition_duration_ms,
        )
    }

    /// The slots of the track, including the wrap copies.
    pub fn track_slots(&self) -> impl Iterator<Item = TrackSlot> + use<> {
        track_slots(self.len())
    }

    /// One dot per slide; only the settled active slide's dot is active.
    pub fn dots(&self) -> impl Iterator<Item = DotState> + '_ {
        let settled = self.machine.is_settled();
        let active = self.machine.active();
        (0..self.len()).map(move |index| DotState {
            index,
            active: settled && index == active,
        })
    }

    /// Renders arrows and dots through `chrome`, honoring the hide options.
    pub fn chrome<C: CarouselChrome + ?Sized>(&self, chrome: &C) -> Chrome<C::Node> {
        Chrome::build(
            chrome,
            self.dots(),
            self.config.hide_arrows,
            self.config.hide_dots,
        )
    }

    /// Height of the carousel for a given width.
    #[must_use]
    pub fn height_for_width(&self, width: f64) -> f64 {
        self.config.height_for_width(width)
    }

    fn step(&mut self, delta: isize, origin: ChangeOrigin, now: u64) -> bool {
        if !self.mounted {
            return false;
        }
        self.reset_autoplay(now);
        let target = self.machine.active() as isize + delta;
        self.navigate(target, origin, now)
    }

    fn reset_autoplay(&mut self, now: u64) {
        let len = self.len();
        self.autoplay.reset(&mut self.timers, now, len);
    }

    fn navigate(&mut self, target: isize, origin: ChangeOrigin, now: u64) -> bool {
        let force = origin == ChangeOrigin::External || !self.machine.is_controlled();
        match self.machine.request_change(target, origin, force, now) {
            Ok(change) => {
                if change.notify {
                    self.events.push(CarouselEvent::SlideChange(change.to));
                }
                if change.committed {
                    self.events.push(CarouselEvent::TransitionStarted {
                        from: change.from,
                        to: change.to,
                        shift: change.shift,
                    });
                    if change.settled {
                        self.settled(change.to, now);
                    }
                }
                self.events.push(CarouselEvent::Repaint);
                true
            }
            Err(err @ Rejection::OutOfRange { .. }) => {
                warn!(%err, ?origin, "slide change rejected");
                false
            }
            Err(err) => {
                debug!(%err, ?origin, "slide change rejected");
                false
            }
        }
    }

    fn settled(&mut self, index: usize, now: u64) {
        self.events.push(CarouselEvent::TransitionSettled(index));
        self.events.push(CarouselEvent::Repaint);
        if self.machine.is_controlled() {
            self.sync_external(now);
        }
    }

    /// Moves towards the controlled index if it differs from the active one.
    fn sync_external(&mut self, now: u64) -> bool {
        let Some(index) = self.external else {
            return false;
        };
        if index >= self.len() {
            self.external = None;
            return false;
        }
        if index == self.machine.active() {
            self.machine.take_request();
            return false;
        }
        // Answering our own request keeps its direction across the wrap.
        let target = self
            .machine
            .take_request()
            .filter(|r| r.index == index)
            .map_or(index as isize, |r| r.target);
        self.navigate(target, ChangeOrigin::External, now)
    }

    fn pauses_on_hover(&self) -> bool {
        self.config.autoplay && self.config.autoplay_pause_on_hover
    }

    fn accepts(&self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Mouse => !self.config.disable_mouse_drag,
            PointerKind::Touch => !self.config.disable_touch,
        }
    }
}
