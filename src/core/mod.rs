pub mod collision;
pub mod config;
pub mod constants;
pub mod control;
pub mod gauge;
pub mod intensity;
pub mod pattern;
pub mod samples;

pub use collision::{CollisionDetector, CollisionEvent, CollisionFlash};
pub use config::{ConfigError, HapticConfig};
pub use control::{Actuator, ActuatorCommand, ControlLoop, ControlState, TickOutput};
pub use intensity::ThrottleReading;
pub use pattern::{Overrides, PulsePattern, PulseStep, Regime};
pub use samples::{MotionSample, OrientationSample, RawMotion, RawOrientation, SampleStore};
