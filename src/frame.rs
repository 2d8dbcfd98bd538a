use crate::actuator::NavigatorVibrator;
use crate::constants::TICK_STATS_INTERVAL_SEC;
use crate::core::{ControlLoop, SampleStore};
use crate::dashboard::Dashboard;
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type HapticLoop = ControlLoop<NavigatorVibrator>;

pub struct FrameContext {
    pub control: Rc<RefCell<HapticLoop>>,
    pub store: Rc<SampleStore>,
    pub dashboard: Rc<RefCell<Dashboard>>,

    pub last_instant: Instant,
    pub stats_elapsed_sec: f32,
    pub stats_ticks: u32,
}

impl FrameContext {
    pub fn new(
        control: Rc<RefCell<HapticLoop>>,
        store: Rc<SampleStore>,
        dashboard: Rc<RefCell<Dashboard>>,
    ) -> Self {
        Self {
            control,
            store,
            dashboard,
            last_instant: Instant::now(),
            stats_elapsed_sec: 0.0,
            stats_ticks: 0,
        }
    }

    /// One display-refresh step. Returns false once the loop has been stopped.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let out = self.control.borrow_mut().tick(&self.store, dom::now_ms());
        let Some(out) = out else {
            return false;
        };
        self.dashboard.borrow_mut().publish(&out);

        self.stats_ticks += 1;
        self.stats_elapsed_sec += dt_sec;
        if self.stats_elapsed_sec >= TICK_STATS_INTERVAL_SEC {
            log::debug!(
                "[loop] {:.1} ticks/s level={} regime={}",
                self.stats_ticks as f32 / self.stats_elapsed_sec,
                out.displayed_intensity,
                out.regime.as_str()
            );
            self.stats_ticks = 0;
            self.stats_elapsed_sec = 0.0;
        }
        true
    }

    fn teardown(&mut self) {
        self.control.borrow_mut().stop();
        self.dashboard.borrow_mut().reset();
        self.store.clear();
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop.
pub struct LoopHandle {
    frame_ctx: Rc<RefCell<FrameContext>>,
    tick: TickClosure,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    /// Cancel the pending frame and stop the actuator before returning.
    pub fn cancel(self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.frame_ctx.borrow_mut().teardown();
        // drops the self-referencing closure
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickClosure, raf_id: &Cell<Option<i32>>) {
    let id = match (web::window(), tick.borrow().as_ref()) {
        (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
        _ => None,
    };
    raf_id.set(id);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone, &raf_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);

    LoopHandle {
        frame_ctx,
        tick,
        raf_id,
    }
}
