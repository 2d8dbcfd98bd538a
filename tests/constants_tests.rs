// Host-side tests for constants, gauge mapping and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/core/mod.rs"]
mod haptics;

use constants::*;
use haptics::constants::*;
use haptics::gauge::{format_reading, is_redline, needle_angle_deg};

#[test]
#[allow(clippy::assertions_on_constants)]
fn haptic_constants_are_within_reasonable_bounds() {
    assert!(ACTIVE_WINDOW_DEG > 0.0 && ACTIVE_WINDOW_DEG <= 90.0);
    assert!(BRAKE_THRESHOLD_DEG > 0.0 && BRAKE_THRESHOLD_DEG < 90.0);
    assert!(JERK_THRESHOLD > 0.0);
    assert!(JERK_MIN_INTERVAL_MS > 0);
    assert!(COLLISION_FLASH_MS > 0);
    assert!(COLLISION_PULSE_MS > 0);
    assert!(AFTERBURNER_PULSES > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // afterburner band sits inside the active window, near full throttle
    assert!(AFTERBURNER_THRESHOLD_DEG > -ACTIVE_WINDOW_DEG);
    assert!(AFTERBURNER_THRESHOLD_DEG < 0.0);

    // cruise pulse grows from min_on up to the full cycle
    assert!(CRUISE_MIN_ON_MS > 0.0);
    assert!(CRUISE_CYCLE_MS > CRUISE_MIN_ON_MS);
    assert!(CRUISE_GAP_MS < CRUISE_MIN_ON_MS);

    // afterburner pulses are shorter than the weakest cruise buzz
    assert!(AFTERBURNER_ON_MS < CRUISE_MIN_ON_MS);
    assert!(AFTERBURNER_OFF_MS > 0.0);
}

#[test]
fn dom_ids_are_unique() {
    let mut ids = vec![
        OVERLAY_ID,
        PERMISSION_BUTTON_ID,
        PERMISSION_ERROR_ID,
        DASHBOARD_ID,
        GAUGE_NEEDLE_ID,
        GAUGE_LEVEL_ID,
        THROTTLE_BUTTON_ID,
    ];
    ids.extend(READOUT_ORIENTATION_IDS);
    ids.extend(READOUT_MOTION_IDS);
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
}

#[test]
fn gauge_needle_sweeps_full_arc() {
    assert_eq!(needle_angle_deg(0), -135.0);
    assert_eq!(needle_angle_deg(5), 0.0);
    assert_eq!(needle_angle_deg(10), 135.0);
    assert_eq!(needle_angle_deg(200), 135.0);
    let mut prev = needle_angle_deg(0);
    for level in 1..=LEVEL_MAX {
        let a = needle_angle_deg(level);
        assert!(a > prev);
        prev = a;
    }
}

#[test]
fn redline_only_at_top_level() {
    assert!(!is_redline(9));
    assert!(is_redline(10));
}

#[test]
fn readings_format_with_two_decimals() {
    assert_eq!(format_reading(Some(12.3456)), "12.35");
    assert_eq!(format_reading(Some(-0.5)), "-0.50");
    assert_eq!(format_reading(None), "--");
    assert_eq!(format_reading(Some(f64::NAN)), "--");
}
