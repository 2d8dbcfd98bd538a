use super::constants::*;

/// Error raised while applying URL query overrides to a [`HapticConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("inconsistent configuration: {0}")]
    Inconsistent(&'static str),
}

/// Tunable parameters of the throttle loop and collision detector.
#[derive(Clone, Debug, PartialEq)]
pub struct HapticConfig {
    pub active_window_deg: f32,
    pub afterburner_threshold_deg: f32,
    pub brake_threshold_deg: f32,
    pub afterburner_on_ms: f32,
    pub afterburner_off_ms: f32,
    pub afterburner_pulses: usize,
    pub cruise_min_on_ms: f32,
    pub cruise_cycle_ms: f32,
    pub cruise_gap_ms: f32,
    pub jerk_threshold: f32,
    pub jerk_min_interval_ms: u64,
    pub collision_flash_ms: u64,
    pub collision_pulse_ms: u32,
}

impl Default for HapticConfig {
    fn default() -> Self {
        Self {
            active_window_deg: ACTIVE_WINDOW_DEG,
            afterburner_threshold_deg: AFTERBURNER_THRESHOLD_DEG,
            brake_threshold_deg: BRAKE_THRESHOLD_DEG,
            afterburner_on_ms: AFTERBURNER_ON_MS,
            afterburner_off_ms: AFTERBURNER_OFF_MS,
            afterburner_pulses: AFTERBURNER_PULSES,
            cruise_min_on_ms: CRUISE_MIN_ON_MS,
            cruise_cycle_ms: CRUISE_CYCLE_MS,
            cruise_gap_ms: CRUISE_GAP_MS,
            jerk_threshold: JERK_THRESHOLD,
            jerk_min_interval_ms: JERK_MIN_INTERVAL_MS,
            collision_flash_ms: COLLISION_FLASH_MS,
            collision_pulse_ms: COLLISION_PULSE_MS,
        }
    }
}

impl HapticConfig {
    /// Build a config from a URL query string such as `?afterburner=-10&jerk=250`.
    ///
    /// Empty pairs are skipped. Any unknown key or unparsable value rejects the
    /// whole query.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            cfg.apply(key, value)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "window" => self.active_window_deg = parse(key, value)?,
            "afterburner" => self.afterburner_threshold_deg = parse(key, value)?,
            "brake" => self.brake_threshold_deg = parse(key, value)?,
            "jerk" => self.jerk_threshold = parse(key, value)?,
            "jerk_interval" => self.jerk_min_interval_ms = parse(key, value)?,
            "flash" => self.collision_flash_ms = parse(key, value)?,
            "min_on" => self.cruise_min_on_ms = parse(key, value)?,
            "cycle" => self.cruise_cycle_ms = parse(key, value)?,
            "gap" => self.cruise_gap_ms = parse(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            self.active_window_deg,
            self.afterburner_threshold_deg,
            self.brake_threshold_deg,
            self.afterburner_on_ms,
            self.afterburner_off_ms,
            self.cruise_min_on_ms,
            self.cruise_cycle_ms,
            self.cruise_gap_ms,
            self.jerk_threshold,
        ];
        if floats.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Inconsistent("values must be finite"));
        }
        if !(self.active_window_deg > 0.0) {
            return Err(ConfigError::Inconsistent("active window must be positive"));
        }
        if self.afterburner_threshold_deg < -self.active_window_deg
            || self.afterburner_threshold_deg > 0.0
        {
            return Err(ConfigError::Inconsistent(
                "afterburner threshold must lie inside the active window",
            ));
        }
        if !(self.cruise_min_on_ms >= 0.0 && self.cruise_min_on_ms < self.cruise_cycle_ms) {
            return Err(ConfigError::Inconsistent("min_on must be below cycle"));
        }
        if self.cruise_gap_ms < 0.0 {
            return Err(ConfigError::Inconsistent("gap must not be negative"));
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
