use super::config::HapticConfig;
use super::constants::LEVEL_MAX;

/// Throttle position derived from the side-roll angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrottleReading {
    /// 0 at idle (-window), 1 at full throttle (0°).
    pub linear: f32,
    /// Cubic response used to drive the actuator.
    pub eased: f32,
    /// Readout level, from `linear` so the number moves evenly.
    pub level: u8,
    /// False when the raw angle lies outside the active window; actuation
    /// must then be suppressed whatever `eased` says.
    pub in_range: bool,
}

/// Map a side-roll angle (degrees) into the throttle reading.
pub fn map(tilt_side: f32, config: &HapticConfig) -> ThrottleReading {
    let window = config.active_window_deg;
    let in_range = (-window..=0.0).contains(&tilt_side);
    let clamped = if tilt_side.is_nan() {
        -window
    } else {
        tilt_side.clamp(-window, 0.0)
    };
    let linear = ((clamped + window) / window).clamp(0.0, 1.0);
    let eased = ease_cubic(linear);
    ThrottleReading {
        linear,
        eased,
        level: level_for(linear),
        in_range,
    }
}

#[inline]
pub fn ease_cubic(linear: f32) -> f32 {
    linear * linear * linear
}

#[inline]
pub fn level_for(linear: f32) -> u8 {
    (linear * LEVEL_MAX as f32).round().clamp(0.0, LEVEL_MAX as f32) as u8
}
