use super::collision::{CollisionDetector, CollisionEvent, CollisionFlash};
use super::config::HapticConfig;
use super::intensity;
use super::pattern::{self, Overrides, PulsePattern, Regime};
use super::samples::{RawMotion, SampleStore};

/// Command for a vibration actuator. Every command replaces the previous one.
#[derive(Clone, Debug, PartialEq)]
pub enum ActuatorCommand {
    Stop,
    /// Single buzz of the given length.
    Pulse(u32),
    Pattern(PulsePattern),
}

/// Seam to the vibration hardware.
///
/// Issuing is fire-and-forget and must be idempotent: sending `Stop` while
/// stopped, or the same pattern every frame, has no effect beyond restarting
/// the actuator's cycle.
pub trait Actuator {
    fn is_available(&self) -> bool;
    fn issue(&mut self, command: &ActuatorCommand);
}

/// State owned by the control loop and published for display.
#[derive(Clone, Copy, Debug)]
pub struct ControlState {
    pub current_intensity: u8,
    pub braking_active: bool,
    pub colliding: CollisionFlash,
    pub throttle_engaged: bool,
    /// Ticks leave the actuator alone until this time so a collision pulse
    /// plays out in full.
    pub pulse_until_ms: u64,
}

/// What one tick produced, for the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutput {
    pub displayed_intensity: u8,
    pub braking_active: bool,
    pub colliding_active: bool,
    pub regime: Regime,
    pub pattern: PulsePattern,
}

pub struct ControlLoop<A: Actuator> {
    actuator: A,
    config: HapticConfig,
    state: ControlState,
    detector: CollisionDetector,
    running: bool,
    last_regime: Option<Regime>,
}

impl<A: Actuator> ControlLoop<A> {
    pub fn new(actuator: A, config: HapticConfig) -> Self {
        if !actuator.is_available() {
            log::warn!("[loop] no vibration actuator; running without haptics");
        }
        Self {
            state: ControlState {
                current_intensity: 0,
                braking_active: false,
                colliding: CollisionFlash::new(config.collision_flash_ms),
                throttle_engaged: true,
                pulse_until_ms: 0,
            },
            detector: CollisionDetector::new(&config),
            actuator,
            config,
            running: false,
            last_regime: None,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("[loop] started");
        }
        self.running = true;
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn config(&self) -> &HapticConfig {
        &self.config
    }

    pub fn set_throttle_engaged(&mut self, engaged: bool) {
        self.state.throttle_engaged = engaged;
    }

    /// Run one control step against the latest stored samples.
    ///
    /// Returns `None` while stopped; nothing is sent to the actuator then.
    /// While a collision pulse is playing the output is still computed but
    /// no command is issued.
    pub fn tick(&mut self, store: &SampleStore, now_ms: u64) -> Option<TickOutput> {
        if !self.running {
            return None;
        }

        let (regime, pattern, level, braking) = match store.orientation() {
            Some(o) if o.has_tilt_side => {
                let braking = pattern::is_braking(o.tilt_forward, &self.config);
                let reading = intensity::map(o.tilt_side, &self.config);
                let overrides = Overrides {
                    throttle_engaged: self.state.throttle_engaged,
                    braking,
                };
                let (regime, pattern) =
                    pattern::select(&reading, o.tilt_side, overrides, &self.config);
                let level = match regime {
                    Regime::Braking | Regime::Disengaged => 0,
                    _ => reading.level,
                };
                (regime, pattern, level, braking)
            }
            // no usable roll reading yet
            _ => (Regime::Idle, PulsePattern::Stop, 0, false),
        };

        if self.last_regime != Some(regime) {
            log::debug!("[loop] regime {:?} -> {}", self.last_regime, regime.as_str());
            self.last_regime = Some(regime);
        }

        if now_ms >= self.state.pulse_until_ms {
            let command = match &pattern {
                PulsePattern::Stop => ActuatorCommand::Stop,
                p => ActuatorCommand::Pattern(p.clone()),
            };
            self.send(&command);
        }

        self.state.current_intensity = level;
        self.state.braking_active = braking;
        Some(TickOutput {
            displayed_intensity: level,
            braking_active: braking,
            colliding_active: self.state.colliding.is_active(now_ms),
            regime,
            pattern,
        })
    }

    /// Store a motion sample and run collision detection on it.
    ///
    /// A detected collision sets the flash flag and fires one strong pulse,
    /// independent of the throttle gate.
    pub fn on_motion(&mut self, store: &SampleStore, raw: RawMotion) -> Option<CollisionEvent> {
        let sample = store.record_motion(raw);
        if !self.running {
            return None;
        }
        let event = self.detector.on_motion_sample(sample)?;
        log::info!("[collision] jerk={:.1} at {}ms", event.jerk, event.timestamp_ms);
        self.state.colliding.trigger(event.timestamp_ms);
        self.state.pulse_until_ms =
            event.timestamp_ms + u64::from(self.config.collision_pulse_ms);
        self.send(&ActuatorCommand::Pulse(self.config.collision_pulse_ms));
        Some(event)
    }

    pub fn colliding_active(&self, now_ms: u64) -> bool {
        self.state.colliding.is_active(now_ms)
    }

    /// Tear the session down. Sends exactly one `Stop` when the loop was
    /// running, so the actuator is never left buzzing.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.send(&ActuatorCommand::Stop);
        self.state.current_intensity = 0;
        self.state.braking_active = false;
        self.state.colliding.clear();
        self.state.pulse_until_ms = 0;
        self.detector.reset();
        self.last_regime = None;
        log::info!("[loop] stopped");
        true
    }

    fn send(&mut self, command: &ActuatorCommand) {
        if self.actuator.is_available() {
            self.actuator.issue(command);
        }
    }
}
