use super::config::HapticConfig;
use super::samples::MotionSample;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionEvent {
    /// |Δa| / Δt between the two accepted samples.
    pub jerk: f32,
    pub timestamp_ms: u64,
}

/// Jerk-threshold impact detector on the linear acceleration stream.
///
/// Keeps only the last accepted sample. Samples that arrive sooner than the
/// minimum interval after it are skipped entirely so the Δt used for the jerk
/// estimate never gets small enough to amplify sensor noise.
#[derive(Clone, Debug)]
pub struct CollisionDetector {
    last: Option<MotionSample>,
    threshold: f32,
    min_interval_ms: u64,
}

impl CollisionDetector {
    pub fn new(config: &HapticConfig) -> Self {
        Self {
            last: None,
            threshold: config.jerk_threshold,
            min_interval_ms: config.jerk_min_interval_ms,
        }
    }

    pub fn on_motion_sample(&mut self, sample: MotionSample) -> Option<CollisionEvent> {
        let Some(prev) = self.last else {
            self.last = Some(sample);
            return None;
        };
        // non-monotonic timestamps fall in here too
        let elapsed_ms = match sample.timestamp_ms.checked_sub(prev.timestamp_ms) {
            Some(dt) if dt >= self.min_interval_ms && dt > 0 => dt,
            _ => return None,
        };
        self.last = Some(sample);

        let delta = (sample.acceleration - prev.acceleration).length();
        let jerk = delta / (elapsed_ms as f32 / 1000.0);
        (jerk > self.threshold).then_some(CollisionEvent {
            jerk,
            timestamp_ms: sample.timestamp_ms,
        })
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Transient "colliding" display flag that clears itself after a fixed window.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollisionFlash {
    since_ms: Option<u64>,
    duration_ms: u64,
}

impl CollisionFlash {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            since_ms: None,
            duration_ms,
        }
    }

    pub fn trigger(&mut self, now_ms: u64) {
        self.since_ms = Some(now_ms);
    }

    pub fn is_active(&self, now_ms: u64) -> bool {
        match self.since_ms {
            Some(since) => now_ms.saturating_sub(since) < self.duration_ms,
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.since_ms = None;
    }
}
