use crate::constants::*;
use crate::core::gauge::{format_reading, is_redline, needle_angle_deg};
use crate::core::{RawMotion, RawOrientation, TickOutput};
use crate::dom;
use web_sys as web;

/// Cached dashboard elements; any of them may be missing from the page.
pub struct Dashboard {
    document: web::Document,
    root: Option<web::Element>,
    needle: Option<web::Element>,
    last_level: Option<u8>,
}

impl Dashboard {
    pub fn new(document: &web::Document) -> Self {
        Self {
            root: document.get_element_by_id(DASHBOARD_ID),
            needle: document.get_element_by_id(GAUGE_NEEDLE_ID),
            document: document.clone(),
            last_level: None,
        }
    }

    pub fn show(&self) {
        if let Some(root) = &self.root {
            dom::set_class(root, CLASS_HIDDEN, false);
        }
    }

    /// Publish one tick's outputs: gauge needle, level readout, state classes.
    pub fn publish(&mut self, out: &TickOutput) {
        if self.last_level != Some(out.displayed_intensity) {
            self.last_level = Some(out.displayed_intensity);
            let level = out.displayed_intensity;
            if let Some(needle) = &self.needle {
                _ = needle.set_attribute(
                    "style",
                    &format!("transform: rotate({:.1}deg)", needle_angle_deg(level)),
                );
                dom::set_class(needle, CLASS_REDLINE, is_redline(level));
            }
            dom::set_text(&self.document, GAUGE_LEVEL_ID, &level.to_string());
        }
        if let Some(root) = &self.root {
            dom::set_class(root, CLASS_BRAKING, out.braking_active);
            dom::set_class(root, CLASS_COLLIDING, out.colliding_active);
        }
    }

    pub fn publish_orientation(&self, raw: &RawOrientation) {
        for (id, v) in READOUT_ORIENTATION_IDS
            .iter()
            .zip([raw.alpha, raw.beta, raw.gamma])
        {
            dom::set_text(&self.document, id, &format_reading(v));
        }
    }

    pub fn publish_motion(&self, raw: &RawMotion) {
        for (id, v) in READOUT_MOTION_IDS.iter().zip([raw.x, raw.y, raw.z]) {
            dom::set_text(&self.document, id, &format_reading(v));
        }
    }

    /// Return every indicator to its resting state after teardown.
    pub fn reset(&mut self) {
        self.publish(&TickOutput {
            displayed_intensity: 0,
            braking_active: false,
            colliding_active: false,
            regime: crate::core::Regime::Idle,
            pattern: crate::core::PulsePattern::Stop,
        });
    }
}
