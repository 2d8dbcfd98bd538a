use super::config::HapticConfig;
use super::intensity::ThrottleReading;
use smallvec::SmallVec;

/// One on/off pair of a vibration pattern, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseStep {
    pub on_ms: f32,
    pub off_ms: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PulsePattern {
    /// Cancel whatever the actuator is doing.
    Stop,
    /// Ordered on/off pairs, replayed while the pattern stays selected.
    Repeat(SmallVec<[PulseStep; 3]>),
}

impl PulsePattern {
    #[inline]
    pub fn is_stop(&self) -> bool {
        matches!(self, PulsePattern::Stop)
    }

    pub fn steps(&self) -> &[PulseStep] {
        match self {
            PulsePattern::Stop => &[],
            PulsePattern::Repeat(steps) => steps.as_slice(),
        }
    }

    /// Flatten into the `[on, off, on, off, ..]` list a vibration API takes.
    pub fn to_durations(&self) -> SmallVec<[u32; 6]> {
        self.steps()
            .iter()
            .flat_map(|s| [s.on_ms, s.off_ms])
            .map(|ms| ms.max(0.0).round() as u32)
            .collect()
    }
}

/// Which branch of the selection policy produced the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Throttle control released.
    Disengaged,
    /// Throttle at the idle edge, or no usable orientation yet.
    Idle,
    Braking,
    OutOfRange,
    Afterburner,
    Cruise,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Disengaged => "disengaged",
            Regime::Idle => "idle",
            Regime::Braking => "braking",
            Regime::OutOfRange => "out-of-range",
            Regime::Afterburner => "afterburner",
            Regime::Cruise => "cruise",
        }
    }
}

/// Override flags evaluated ahead of the throttle curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overrides {
    pub throttle_engaged: bool,
    pub braking: bool,
}

impl Default for Overrides {
    fn default() -> Self {
        Self {
            throttle_engaged: true,
            braking: false,
        }
    }
}

/// Pick the pulse pattern for one tick.
///
/// Priority: released throttle, brake, out-of-window, idle, afterburner, cruise.
/// The jump into the afterburner band is deliberately discontinuous.
pub fn select(
    reading: &ThrottleReading,
    tilt_side: f32,
    overrides: Overrides,
    config: &HapticConfig,
) -> (Regime, PulsePattern) {
    if !overrides.throttle_engaged {
        return (Regime::Disengaged, PulsePattern::Stop);
    }
    if overrides.braking {
        return (Regime::Braking, PulsePattern::Stop);
    }
    if !reading.in_range {
        return (Regime::OutOfRange, PulsePattern::Stop);
    }
    if reading.linear <= 0.0 {
        return (Regime::Idle, PulsePattern::Stop);
    }
    if tilt_side > config.afterburner_threshold_deg {
        return (Regime::Afterburner, afterburner_pattern(config));
    }
    (Regime::Cruise, cruise_pattern(reading.eased, config))
}

pub fn afterburner_pattern(config: &HapticConfig) -> PulsePattern {
    let step = PulseStep {
        on_ms: config.afterburner_on_ms,
        off_ms: config.afterburner_off_ms,
    };
    PulsePattern::Repeat(smallvec::smallvec![step; config.afterburner_pulses])
}

pub fn cruise_pattern(eased: f32, config: &HapticConfig) -> PulsePattern {
    let eased = eased.clamp(0.0, 1.0);
    let on_ms = config.cruise_min_on_ms + (config.cruise_cycle_ms - config.cruise_min_on_ms) * eased;
    PulsePattern::Repeat(smallvec::smallvec![PulseStep {
        on_ms,
        off_ms: config.cruise_gap_ms,
    }])
}

/// Braking is a plain threshold on forward pitch.
#[inline]
pub fn is_braking(tilt_forward: f32, config: &HapticConfig) -> bool {
    tilt_forward > config.brake_threshold_deg
}
