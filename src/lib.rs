#![cfg(target_arch = "wasm32")]
use crate::actuator::NavigatorVibrator;
use crate::constants::{PERMISSION_BUTTON_ID, THROTTLE_BUTTON_ID};
use crate::core::{ControlLoop, HapticConfig, SampleStore};
use crate::dashboard::Dashboard;
use crate::frame::{FrameContext, HapticLoop, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod actuator;
mod constants;
mod core;
mod dashboard;
mod dom;
mod events;
mod frame;
mod overlay;
mod permission;

/// One sensing session: the control loop plus the frame loop driving it.
struct Session {
    control: Rc<RefCell<HapticLoop>>,
    store: Rc<SampleStore>,
    dashboard: Rc<RefCell<Dashboard>>,
    handle: RefCell<Option<LoopHandle>>,
}

impl Session {
    fn resume(&self) {
        if self.handle.borrow().is_some() {
            return;
        }
        self.control.borrow_mut().start();
        let ctx = FrameContext::new(
            self.control.clone(),
            self.store.clone(),
            self.dashboard.clone(),
        );
        *self.handle.borrow_mut() = Some(frame::start_loop(Rc::new(RefCell::new(ctx))));
    }

    fn suspend(&self) {
        let handle = self.handle.borrow_mut().take();
        if let Some(h) = handle {
            h.cancel();
        }
    }
}

fn load_config() -> HapticConfig {
    let query = dom::location_query();
    match HapticConfig::from_query(&query) {
        Ok(cfg) => {
            if !query.is_empty() {
                log::info!("[config] overrides applied: {:?}", cfg);
            }
            cfg
        }
        Err(e) => {
            log::warn!("[config] ignoring query `{}`: {}", query, e);
            HapticConfig::default()
        }
    }
}

fn begin_session(document: &web::Document, config: HapticConfig) {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }

    let store = Rc::new(SampleStore::new());
    let control = Rc::new(RefCell::new(ControlLoop::new(NavigatorVibrator::new(), config)));
    let dashboard = Rc::new(RefCell::new(Dashboard::new(document)));

    events::wire_sensor_handlers(events::SensorWiring {
        control: control.clone(),
        store: store.clone(),
        dashboard: dashboard.clone(),
    });
    events::wire_throttle_hold(document, THROTTLE_BUTTON_ID, &control);

    let session = Rc::new(Session {
        control,
        store,
        dashboard,
        handle: RefCell::new(None),
    });
    let suspend = {
        let s = session.clone();
        Rc::new(move || s.suspend()) as Rc<dyn Fn()>
    };
    let resume = {
        let s = session.clone();
        Rc::new(move || s.resume()) as Rc<dyn Fn()>
    };
    events::wire_session_lifecycle(document, suspend, resume);

    overlay::hide(document);
    session.dashboard.borrow().show();
    session.resume();
}

fn wire_permission_button(document: &web::Document, config: HapticConfig) {
    let doc = document.clone();
    dom::add_click_listener(document, PERMISSION_BUTTON_ID, move || {
        let doc = doc.clone();
        let config = config.clone();
        overlay::clear_error(&doc);
        spawn_local(async move {
            match permission::request_sensor_access().await {
                Ok(()) => begin_session(&doc, config),
                Err(e) => {
                    log::error!("[permission] {}", e);
                    overlay::show_error(&doc, &e.to_string());
                }
            }
        });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-throttle starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(PERMISSION_BUTTON_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PERMISSION_BUTTON_ID))?;

    let config = load_config();
    overlay::show(&document);
    wire_permission_button(&document, config);
    Ok(())
}
