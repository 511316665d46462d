// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration loading through `serde`.

#![cfg(feature = "serde")]

use understory_carousel::CarouselConfig;

#[test]
fn missing_keys_take_defaults() {
    let config: CarouselConfig =
        serde_json::from_str(r#"{ "autoplay": true, "hide-dots": true }"#).unwrap();
    assert!(config.autoplay);
    assert!(config.hide_dots);
    assert_eq!(config.transition_duration_ms, 1_500);
    assert_eq!(config.autoplay_interval_ms, 3_000);
    assert_eq!(config.ratio, 0.5625);
    assert_eq!(config.active_slide, None);
}

#[test]
fn controlled_index_is_read() {
    let config: CarouselConfig =
        serde_json::from_str(r#"{ "active-slide": 2, "transition-duration-ms": 400 }"#).unwrap();
    assert!(config.is_controlled());
    assert_eq!(config.active_slide, Some(2));
    assert_eq!(config.transition_duration_ms, 400);
}

#[test]
fn written_config_reads_back() {
    let config = CarouselConfig::new()
        .with_ratio(0.75)
        .with_disable_mouse_drag(true);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"disable-mouse-drag\":true"));
    let back: CarouselConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
