use crate::core::{RawMotion, RawOrientation, SampleStore};
use crate::dashboard::Dashboard;
use crate::dom;
use crate::frame::HapticLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct SensorWiring {
    pub control: Rc<RefCell<HapticLoop>>,
    pub store: Rc<SampleStore>,
    pub dashboard: Rc<RefCell<Dashboard>>,
}

/// Attach the orientation and motion listeners. Handlers only write the
/// latest-value store (plus collision detection); the frame tick does the rest.
pub fn wire_sensor_handlers(w: SensorWiring) {
    wire_deviceorientation(&w);
    wire_devicemotion(&w);
}

fn wire_deviceorientation(w: &SensorWiring) {
    let w = w.clone();
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
            let raw = RawOrientation {
                alpha: ev.alpha(),
                beta: ev.beta(),
                gamma: ev.gamma(),
            };
            w.store.record_orientation(raw);
            w.dashboard.borrow().publish_orientation(&raw);
        }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(
            "deviceorientation",
            closure.as_ref().unchecked_ref(),
        );
        log::info!("[sensors] deviceorientation wired");
    }
    closure.forget();
}

fn wire_devicemotion(w: &SensorWiring) {
    let w = w.clone();
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
            let accel = ev.acceleration();
            let raw = RawMotion {
                x: accel.as_ref().and_then(|a| a.x()),
                y: accel.as_ref().and_then(|a| a.y()),
                z: accel.as_ref().and_then(|a| a.z()),
                timestamp_ms: dom::now_ms(),
            };
            w.control.borrow_mut().on_motion(&w.store, raw);
            w.dashboard.borrow().publish_motion(&raw);
        }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref());
        log::info!("[sensors] devicemotion wired");
    }
    closure.forget();
}
