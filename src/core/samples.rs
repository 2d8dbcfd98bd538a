use glam::Vec3;
use std::cell::Cell;

/// Orientation as delivered by the sensor layer; any axis may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawOrientation {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

/// Gravity-free acceleration as delivered by the sensor layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawMotion {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub timestamp_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    /// Forward/back pitch (beta), degrees.
    pub tilt_forward: f32,
    /// Left/right roll (gamma), degrees.
    pub tilt_side: f32,
    /// Compass heading (alpha); informational only.
    pub heading: f32,
    /// False when the roll axis was null or non-finite; `tilt_side` then
    /// reads 0 for display but must not drive the actuator.
    pub has_tilt_side: bool,
}

impl From<RawOrientation> for OrientationSample {
    fn from(raw: RawOrientation) -> Self {
        Self {
            tilt_forward: axis(raw.beta),
            tilt_side: axis(raw.gamma),
            heading: axis(raw.alpha),
            has_tilt_side: raw.gamma.is_some_and(f64::is_finite),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub acceleration: Vec3,
    pub timestamp_ms: u64,
}

impl From<RawMotion> for MotionSample {
    fn from(raw: RawMotion) -> Self {
        Self {
            acceleration: Vec3::new(axis(raw.x), axis(raw.y), axis(raw.z)),
            timestamp_ms: raw.timestamp_ms,
        }
    }
}

// null axes read as zero; non-finite values too
#[inline]
fn axis(v: Option<f64>) -> f32 {
    match v {
        Some(v) if v.is_finite() => v as f32,
        _ => 0.0,
    }
}

/// Latest-value slots for the two sensor streams.
///
/// Sensor callbacks overwrite and the frame tick reads a copy. Nothing is
/// queued; the tick only ever sees the most recent reading.
#[derive(Debug, Default)]
pub struct SampleStore {
    orientation: Cell<Option<OrientationSample>>,
    motion: Cell<Option<MotionSample>>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_orientation(&self, raw: RawOrientation) -> OrientationSample {
        let sample = OrientationSample::from(raw);
        self.orientation.set(Some(sample));
        sample
    }

    pub fn record_motion(&self, raw: RawMotion) -> MotionSample {
        let sample = MotionSample::from(raw);
        self.motion.set(Some(sample));
        sample
    }

    pub fn orientation(&self) -> Option<OrientationSample> {
        self.orientation.get()
    }

    pub fn motion(&self) -> Option<MotionSample> {
        self.motion.get()
    }

    pub fn clear(&self) {
        self.orientation.set(None);
        self.motion.set(None);
    }
}
