use crate::frame::HapticLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Press-and-hold throttle control. Without the element on the page the
/// throttle stays engaged for the whole session.
pub fn wire_throttle_hold(
    document: &web::Document,
    element_id: &str,
    control: &Rc<RefCell<HapticLoop>>,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::info!("[throttle] no #{} control; throttle always engaged", element_id);
        return;
    };
    control.borrow_mut().set_throttle_engaged(false);

    let press = {
        let control = control.clone();
        let el_capture = el.clone();
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            control.borrow_mut().set_throttle_engaged(true);
            _ = el_capture.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    _ = el.add_event_listener_with_callback("pointerdown", press.as_ref().unchecked_ref());
    press.forget();

    for name in ["pointerup", "pointercancel", "lostpointercapture"] {
        let control = control.clone();
        let release =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                control.borrow_mut().set_throttle_engaged(false);
            }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback(name, release.as_ref().unchecked_ref());
        release.forget();
    }
}
