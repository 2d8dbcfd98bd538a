/// Haptic throttle tuning constants.
///
/// These are the calibrated defaults behind `HapticConfig`. Angles are in
/// degrees, durations in milliseconds.

// Active tilt window: side roll in [-ACTIVE_WINDOW_DEG, 0] maps to idle..full
pub const ACTIVE_WINDOW_DEG: f32 = 60.0;

// Side roll above this enters the afterburner band
pub const AFTERBURNER_THRESHOLD_DEG: f32 = -15.0;

// Forward pitch above this engages the brake
pub const BRAKE_THRESHOLD_DEG: f32 = 35.0;

// Afterburner pulse train: ON/OFF repeated AFTERBURNER_PULSES times
pub const AFTERBURNER_ON_MS: f32 = 25.0;
pub const AFTERBURNER_OFF_MS: f32 = 15.0;
pub const AFTERBURNER_PULSES: usize = 3;

// Cruise pulse: on = MIN_ON + (CYCLE - MIN_ON) * eased, off = GAP
pub const CRUISE_MIN_ON_MS: f32 = 50.0;
pub const CRUISE_CYCLE_MS: f32 = 400.0;
pub const CRUISE_GAP_MS: f32 = 10.0;

// Collision detection on the linear acceleration stream
pub const JERK_THRESHOLD: f32 = 300.0; // acceleration units per second
pub const JERK_MIN_INTERVAL_MS: u64 = 100; // samples closer than this are skipped
pub const COLLISION_FLASH_MS: u64 = 200; // how long colliding_active stays set
pub const COLLISION_PULSE_MS: u32 = 200; // single strong buzz on impact

// Displayed level scale
pub const LEVEL_MAX: u8 = 10;
