// Host-side tests for URL query configuration overrides.
// The main crate is wasm-only, so we load the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod haptics;

use haptics::{ConfigError, HapticConfig};

#[test]
fn empty_query_yields_defaults() {
    assert_eq!(HapticConfig::from_query(""), Ok(HapticConfig::default()));
    assert_eq!(HapticConfig::from_query("?"), Ok(HapticConfig::default()));
}

#[test]
fn overrides_touch_only_named_parameters() {
    let cfg = HapticConfig::from_query("?afterburner=-10&jerk=250&jerk_interval=80").unwrap();
    let defaults = HapticConfig::default();
    assert_eq!(cfg.afterburner_threshold_deg, -10.0);
    assert_eq!(cfg.jerk_threshold, 250.0);
    assert_eq!(cfg.jerk_min_interval_ms, 80);
    assert_eq!(cfg.active_window_deg, defaults.active_window_deg);
    assert_eq!(cfg.cruise_cycle_ms, defaults.cruise_cycle_ms);
}

#[test]
fn all_keys_are_accepted() {
    let cfg = HapticConfig::from_query(
        "window=45&afterburner=-12&brake=30&jerk=200&jerk_interval=120&flash=300&min_on=40&cycle=300&gap=20",
    )
    .unwrap();
    assert_eq!(cfg.active_window_deg, 45.0);
    assert_eq!(cfg.brake_threshold_deg, 30.0);
    assert_eq!(cfg.collision_flash_ms, 300);
    assert_eq!(cfg.cruise_min_on_ms, 40.0);
    assert_eq!(cfg.cruise_gap_ms, 20.0);
}

#[test]
fn empty_pairs_are_skipped() {
    let cfg = HapticConfig::from_query("&&brake=30&").unwrap();
    assert_eq!(cfg.brake_threshold_deg, 30.0);
}

#[test]
fn unknown_key_is_rejected() {
    assert_eq!(
        HapticConfig::from_query("?turbo=1"),
        Err(ConfigError::UnknownKey("turbo".into()))
    );
}

#[test]
fn bad_value_is_rejected() {
    let err = HapticConfig::from_query("jerk=lots").unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: "jerk".into(),
            value: "lots".into()
        }
    );
    assert!(err.to_string().contains("jerk"));
    assert!(HapticConfig::from_query("flash=-5").is_err());
}

#[test]
fn inconsistent_overrides_are_rejected() {
    assert!(matches!(
        HapticConfig::from_query("afterburner=-70"),
        Err(ConfigError::Inconsistent(_))
    ));
    assert!(matches!(
        HapticConfig::from_query("min_on=500"),
        Err(ConfigError::Inconsistent(_))
    ));
    assert!(matches!(
        HapticConfig::from_query("window=0"),
        Err(ConfigError::Inconsistent(_))
    ));
}

#[test]
fn non_finite_values_are_rejected() {
    for query in ["cycle=inf", "gap=NaN", "jerk=inf", "brake=-inf"] {
        assert!(
            matches!(
                HapticConfig::from_query(query),
                Err(ConfigError::Inconsistent(_))
            ),
            "{query}"
        );
    }
}

#[test]
fn default_config_is_consistent() {
    assert!(HapticConfig::default().validate().is_ok());
}
