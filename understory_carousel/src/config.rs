// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel options.

use understory_timing::DEFAULT_MARGIN_MS;

use crate::ConfigError;

/// Options recognized by [`Carousel`](crate::Carousel).
///
/// Defaults match a 16:9 carousel with a 1.5s slide transition and autoplay
/// off. Presentation hooks (dots and arrows) are not options; see
/// [`CarouselChrome`](crate::CarouselChrome).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct CarouselConfig {
    /// Duration of one slide transition, in milliseconds.
    pub transition_duration_ms: u64,
    /// Whether the carousel advances on its own.
    pub autoplay: bool,
    /// Idle time between automatic advances, in milliseconds.
    ///
    /// The autoplay period is this interval plus the transition duration.
    pub autoplay_interval_ms: u64,
    /// Pause autoplay while the pointer hovers the carousel.
    pub autoplay_pause_on_hover: bool,
    /// Do not show the previous/next arrows.
    pub hide_arrows: bool,
    /// Do not show the slide dots.
    pub hide_dots: bool,
    /// Height divided by width.
    pub ratio: f64,
    /// Ignore touch sessions and recognized touch gestures.
    pub disable_touch: bool,
    /// Ignore mouse drag sessions.
    pub disable_mouse_drag: bool,
    /// Initial slide in uncontrolled mode.
    pub default_active_slide: usize,
    /// Caller-owned slide index; `Some` puts the carousel in controlled mode.
    pub active_slide: Option<usize>,
    /// Slack added to the transition duration before settlement is forced.
    pub settle_margin_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: 1_500,
            autoplay: false,
            autoplay_interval_ms: 3_000,
            autoplay_pause_on_hover: true,
            hide_arrows: false,
            hide_dots: false,
            ratio: 0.5625,
            disable_touch: false,
            disable_mouse_drag: false,
            default_active_slide: 0,
            active_slide: None,
            settle_margin_ms: DEFAULT_MARGIN_MS,
        }
    }
}

impl CarouselConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transition duration in milliseconds.
    #[must_use]
    pub fn with_transition_duration_ms(mut self, ms: u64) -> Self {
        self.transition_duration_ms = ms;
        self
    }

    /// Enables or disables autoplay.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Sets the autoplay idle interval in milliseconds.
    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, ms: u64) -> Self {
        self.autoplay_interval_ms = ms;
        self
    }

    /// Sets whether hovering pauses autoplay.
    #[must_use]
    pub fn with_autoplay_pause_on_hover(mut self, pause: bool) -> Self {
        self.autoplay_pause_on_hover = pause;
        self
    }

    /// Hides or shows the arrows.
    #[must_use]
    pub fn with_hide_arrows(mut self, hide: bool) -> Self {
        self.hide_arrows = hide;
        self
    }

    /// Hides or shows the dots.
    #[must_use]
    pub fn with_hide_dots(mut self, hide: bool) -> Self {
        self.hide_dots = hide;
        self
    }

    /// Sets the aspect ratio (height / width).
    #[must_use]
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Disables touch input.
    #[must_use]
    pub fn with_disable_touch(mut self, disable: bool) -> Self {
        self.disable_touch = disable;
        self
    }

    /// Disables mouse dragging.
    #[must_use]
    pub fn with_disable_mouse_drag(mut self, disable: bool) -> Self {
        self.disable_mouse_drag = disable;
        self
    }

    /// Sets the initial slide for uncontrolled mode.
    #[must_use]
    pub fn with_default_active_slide(mut self, index: usize) -> Self {
        self.default_active_slide = index;
        self
    }

    /// Puts the carousel in controlled mode, starting at `index`.
    #[must_use]
    pub fn with_active_slide(mut self, index: usize) -> Self {
        self.active_slide = Some(index);
        self
    }

    /// Sets the settlement fallback margin in milliseconds.
    #[must_use]
    pub fn with_settle_margin_ms(mut self, ms: u64) -> Self {
        self.settle_margin_ms = ms;
        self
    }

    /// Returns `true` when the caller owns the active index.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.active_slide.is_some()
    }

    /// Period of the autoplay timer: interval plus one transition.
    #[must_use]
    pub fn autoplay_period_ms(&self) -> u64 {
        self.autoplay_interval_ms.saturating_add(self.transition_duration_ms)
    }

    /// Height of the carousel for a given width.
    #[must_use]
    pub fn height_for_width(&self, width: f64) -> f64 {
        width * self.ratio
    }

    /// Checks the options for values the carousel cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(ConfigError::InvalidRatio(self.ratio));
        }
        if self.autoplay && self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroAutoplayInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.transition_duration_ms, 1_500);
        assert_eq!(config.autoplay_interval_ms, 3_000);
        assert!(config.autoplay_pause_on_hover);
        assert!(!config.is_controlled());
        assert_eq!(config.autoplay_period_ms(), 4_500);
        assert_eq!(config.settle_margin_ms, 150);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_ratio_and_interval() {
        let bad_ratio = CarouselConfig::new().with_ratio(0.0);
        assert_eq!(bad_ratio.validate(), Err(ConfigError::InvalidRatio(0.0)));

        let nan = CarouselConfig::new().with_ratio(f64::NAN);
        assert!(nan.validate().is_err());

        let zero = CarouselConfig::new()
            .with_autoplay(true)
            .with_autoplay_interval_ms(0);
        assert_eq!(zero.validate(), Err(ConfigError::ZeroAutoplayInterval));
    }

    #[test]
    fn height_follows_ratio() {
        let config = CarouselConfig::new().with_ratio(0.5);
        assert_eq!(config.height_for_width(800.0), 400.0);
    }
}
