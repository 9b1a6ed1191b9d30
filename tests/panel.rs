#![allow(missing_docs)]
//! Host-level tests for the pixel output buffer and brightness scaling.

use muon_wall::grid::{Strip, strip_address};
use muon_wall::host::HostStrips;
use muon_wall::panel::{Panel, colors, scale};
use proptest::prelude::*;
use smart_leds::RGB8;

#[test]
fn scale_applies_global_brightness() {
    // BRIGHTNESS is 0.05: 255 * 0.05 = 12.75, truncated per channel.
    assert_eq!(scale(RGB8::new(255, 0, 0), 1.0), RGB8::new(12, 0, 0));
    assert_eq!(scale(RGB8::new(255, 255, 255), 10.0), RGB8::new(127, 127, 127));
}

#[test]
fn scale_saturates_at_full_channel_value() {
    // Factor clamps to 1.0 once boost reaches 1/BRIGHTNESS.
    assert_eq!(scale(RGB8::new(200, 10, 0), 20.0), RGB8::new(200, 10, 0));
    assert_eq!(scale(RGB8::new(200, 10, 0), 1_000_000.0), RGB8::new(200, 10, 0));
}

proptest! {
    #[test]
    fn scale_never_exceeds_input_channels(r: u8, g: u8, b: u8, boost in 0.0_f32..1000.0) {
        let scaled = scale(RGB8::new(r, g, b), boost);
        prop_assert!(scaled.r <= r);
        prop_assert!(scaled.g <= g);
        prop_assert!(scaled.b <= b);
    }
}

#[test]
fn set_pixel_commits_both_strips() {
    let mut panel = Panel::new(HostStrips::new());
    panel.set_pixel(0, 0, colors::RED, 1.0);

    let addr = strip_address(0, 0).expect("(0,0) has an LED");
    assert_eq!(panel.driver().pixel(addr), RGB8::new(12, 0, 0));
    assert_eq!(panel.driver().write_count(Strip::A), 1);
    assert_eq!(panel.driver().write_count(Strip::B), 1);
}

#[test]
fn setting_a_hole_is_a_silent_no_op() {
    let mut panel = Panel::new(HostStrips::new());
    panel.set_pixel(1, 1, colors::RED, 1.0);
    panel.set_pixel(16, 0, colors::RED, 1.0); // off the wall

    assert!(panel.driver().is_all_black());
    // Nothing staged, so nothing was written either.
    assert_eq!(panel.driver().write_count(Strip::A), 0);
    assert_eq!(panel.driver().write_count(Strip::B), 0);
}

#[test]
fn deferred_pixels_reach_the_driver_only_on_commit() {
    let mut panel = Panel::new(HostStrips::new());
    panel.set_pixel_deferred(0, 0, colors::RED, 1.0);
    panel.set_pixel_deferred(2, 0, colors::BLUE, 1.0);
    assert_eq!(panel.driver().write_count(Strip::A), 0);
    assert!(panel.driver().is_all_black());

    panel.commit();
    let first = strip_address(0, 0).expect("mapped");
    let second = strip_address(2, 0).expect("mapped");
    assert_eq!(panel.driver().pixel(first), RGB8::new(12, 0, 0));
    assert_eq!(panel.driver().pixel(second), RGB8::new(0, 0, 12));
    assert_eq!(panel.driver().write_count(Strip::A), 1);
}

#[test]
fn clear_all_is_idempotent() {
    let mut panel = Panel::new(HostStrips::new());
    panel.set_pixel(0, 0, colors::WHITE, 1.0);
    panel.set_pixel(1, 0, colors::WHITE, 1.0);

    panel.clear_all();
    let after_first: (Vec<RGB8>, Vec<RGB8>) = (
        panel.driver().frame(Strip::A).to_vec(),
        panel.driver().frame(Strip::B).to_vec(),
    );
    assert!(panel.driver().is_all_black());

    panel.clear_all();
    assert_eq!(panel.driver().frame(Strip::A), after_first.0.as_slice());
    assert_eq!(panel.driver().frame(Strip::B), after_first.1.as_slice());
    assert!(panel.driver().is_all_black());
}

#[test]
fn fill_paints_every_addressable_pixel() {
    let mut panel = Panel::new(HostStrips::new());
    panel.fill(RGB8::new(255, 0, 255));

    for frame in [panel.driver().frame(Strip::A), panel.driver().frame(Strip::B)] {
        assert!(frame.iter().all(|c| *c == RGB8::new(12, 0, 12)));
    }
}
