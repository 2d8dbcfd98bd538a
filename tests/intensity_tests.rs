// Host-side tests for the tilt -> intensity mapping.
// The main crate is wasm-only, so we load the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod haptics;

use haptics::intensity::{ease_cubic, level_for, map};
use haptics::HapticConfig;

#[test]
fn idle_boundary_maps_to_zero() {
    let cfg = HapticConfig::default();
    let r = map(-60.0, &cfg);
    assert_eq!(r.linear, 0.0);
    assert_eq!(r.eased, 0.0);
    assert_eq!(r.level, 0);
    assert!(r.in_range);
}

#[test]
fn half_tilt_matches_reference_values() {
    let cfg = HapticConfig::default();
    let r = map(-30.0, &cfg);
    assert!((r.linear - 0.5).abs() < 1e-6);
    assert!((r.eased - 0.125).abs() < 1e-6);
    assert_eq!(r.level, 5);
}

#[test]
fn full_throttle_boundary_maps_to_one() {
    let cfg = HapticConfig::default();
    let r = map(0.0, &cfg);
    assert_eq!(r.linear, 1.0);
    assert_eq!(r.eased, 1.0);
    assert_eq!(r.level, 10);
    assert!(r.in_range);
}

#[test]
fn linear_and_eased_are_monotonic_and_eased_never_exceeds_linear() {
    let cfg = HapticConfig::default();
    let mut prev = map(-60.0, &cfg);
    for step in 1..=600 {
        let tilt = -60.0 + step as f32 * 0.1;
        let r = map(tilt, &cfg);
        assert!(r.linear >= prev.linear, "linear decreased at {tilt}");
        assert!(r.eased >= prev.eased, "eased decreased at {tilt}");
        assert!(r.eased <= r.linear + 1e-6, "eased above linear at {tilt}");
        assert!((0.0..=1.0).contains(&r.linear));
        prev = r;
    }
}

#[test]
fn outside_window_is_flagged_and_clamped() {
    let cfg = HapticConfig::default();

    let below = map(-75.0, &cfg);
    assert!(!below.in_range);
    assert_eq!(below.linear, 0.0);

    let above = map(12.0, &cfg);
    assert!(!above.in_range);
    assert_eq!(above.linear, 1.0);
    assert_eq!(above.level, 10);
}

#[test]
fn nan_tilt_is_out_of_range_at_idle() {
    let cfg = HapticConfig::default();
    let r = map(f32::NAN, &cfg);
    assert!(!r.in_range);
    assert_eq!(r.linear, 0.0);
}

#[test]
fn narrower_window_rescales_the_curve() {
    let cfg = HapticConfig {
        active_window_deg: 40.0,
        afterburner_threshold_deg: -10.0,
        ..HapticConfig::default()
    };
    let r = map(-20.0, &cfg);
    assert!((r.linear - 0.5).abs() < 1e-6);
    assert!(!map(-45.0, &cfg).in_range);
}

#[test]
fn level_rounds_linear_not_eased() {
    assert_eq!(level_for(0.04), 0);
    assert_eq!(level_for(0.05), 1);
    assert_eq!(level_for(0.94), 9);
    assert_eq!(level_for(0.96), 10);
    assert!((ease_cubic(0.8) - 0.512).abs() < 1e-6);
}
