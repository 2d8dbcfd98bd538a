use crate::core::{Actuator, ActuatorCommand};
use wasm_bindgen::JsValue;
use web_sys as web;

/// `navigator.vibrate` backed actuator.
///
/// Browsers without the Vibration API (desktop Safari, iOS) simply get no
/// haptics; the capability is probed once at construction.
pub struct NavigatorVibrator {
    navigator: Option<web::Navigator>,
}

impl NavigatorVibrator {
    pub fn new() -> Self {
        let navigator = web::window().map(|w| w.navigator()).filter(|n| {
            js_sys::Reflect::has(n, &JsValue::from_str("vibrate")).unwrap_or(false)
        });
        log::info!("[actuator] vibration available={}", navigator.is_some());
        Self { navigator }
    }
}

impl Actuator for NavigatorVibrator {
    fn is_available(&self) -> bool {
        self.navigator.is_some()
    }

    fn issue(&mut self, command: &ActuatorCommand) {
        let Some(nav) = &self.navigator else {
            return;
        };
        match command {
            ActuatorCommand::Stop => {
                _ = nav.vibrate_with_duration(0);
            }
            ActuatorCommand::Pulse(ms) => {
                _ = nav.vibrate_with_duration(*ms);
            }
            ActuatorCommand::Pattern(pattern) => {
                let seq = js_sys::Array::new();
                for ms in pattern.to_durations() {
                    seq.push(&JsValue::from(ms));
                }
                _ = nav.vibrate_with_pattern(&seq);
            }
        }
    }
}
