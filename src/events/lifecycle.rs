use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Suspend sensing when the page is hidden or unloaded, resume when it is
/// visible again. `suspend` must stop the actuator synchronously.
pub fn wire_session_lifecycle(
    document: &web::Document,
    suspend: Rc<dyn Fn()>,
    resume: Rc<dyn Fn()>,
) {
    let doc = document.clone();
    let suspend_hidden = suspend.clone();
    let visibility = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if doc.hidden() {
            log::info!("[session] page hidden");
            suspend_hidden();
        } else {
            log::info!("[session] page visible");
            resume();
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", visibility.as_ref().unchecked_ref());
    visibility.forget();

    if let Some(window) = web::window() {
        let pagehide = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            log::info!("[session] pagehide");
            suspend();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("pagehide", pagehide.as_ref().unchecked_ref());
        pagehide.forget();
    }
}
