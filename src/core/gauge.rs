use super::constants::LEVEL_MAX;

// Needle sweeps from -GAUGE_MAX_ANGLE_DEG (level 0) to +GAUGE_MAX_ANGLE_DEG
pub const GAUGE_MAX_ANGLE_DEG: f32 = 135.0;
pub const REDLINE_LEVEL: f32 = 9.5;

#[inline]
pub fn needle_angle_deg(level: u8) -> f32 {
    let level = level.min(LEVEL_MAX) as f32;
    (level / LEVEL_MAX as f32) * (GAUGE_MAX_ANGLE_DEG * 2.0) - GAUGE_MAX_ANGLE_DEG
}

#[inline]
pub fn is_redline(level: u8) -> bool {
    level as f32 >= REDLINE_LEVEL
}

/// Two-decimal readout for raw sensor values, `--` when the axis is missing.
pub fn format_reading(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => "--".to_string(),
    }
}
