// Shared DOM wiring constants used by the web frontend.

// Permission overlay
pub const OVERLAY_ID: &str = "start-overlay";
pub const PERMISSION_BUTTON_ID: &str = "permission-button";
pub const PERMISSION_ERROR_ID: &str = "permission-error";

// Dashboard
pub const DASHBOARD_ID: &str = "dashboard";
pub const GAUGE_NEEDLE_ID: &str = "gauge-needle";
pub const GAUGE_LEVEL_ID: &str = "gauge-level";
pub const THROTTLE_BUTTON_ID: &str = "throttle";

// Raw sensor readout cells in display order
pub const READOUT_ORIENTATION_IDS: [&str; 3] = ["readout-alpha", "readout-beta", "readout-gamma"];
pub const READOUT_MOTION_IDS: [&str; 3] = ["readout-x", "readout-y", "readout-z"];

// State classes toggled on the dashboard element
pub const CLASS_BRAKING: &str = "braking";
pub const CLASS_COLLIDING: &str = "colliding";
pub const CLASS_REDLINE: &str = "redline";
pub const CLASS_HIDDEN: &str = "hidden";

// Frame-rate diagnostics
pub const TICK_STATS_INTERVAL_SEC: f32 = 5.0;
