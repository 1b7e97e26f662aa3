use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::render::CanvasSurface;
use crate::stats::FrameStats;
use instant::Instant;
use starfield_core::Simulation;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub surface: CanvasSurface,
    pub stats: FrameStats,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(sim: Rc<RefCell<Simulation>>, surface: CanvasSurface) -> Self {
        Self {
            sim,
            surface,
            stats: FrameStats::default(),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        let summary = self.sim.borrow_mut().frame(&mut self.surface);

        if let Some(report) =
            self.stats
                .record(dt_sec, summary.spawned_streak, FRAME_STATS_INTERVAL_SEC)
        {
            log::debug!(
                "[frame] {:.1} fps over {} frames, particles={} streaks={} spawned={}",
                report.fps,
                report.frames,
                summary.particles,
                summary.streaks,
                report.streaks_spawned
            );
        }
    }
}

struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self, window: &web::Window) {
        if !self.running.get() {
            return;
        }
        if let Some(cb) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}

/// Control over a running render loop.
pub struct LoopHandle {
    window: web::Window,
    state: Rc<LoopState>,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Cancel the pending frame and stop rescheduling. Idempotent.
    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let Some(id) = self.state.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure <-> state cycle so both can be freed.
        drop(self.state.tick.borrow_mut().take());
        log::info!("[frame] render loop stopped");
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame`, one frame per repaint.
pub fn start_loop(window: &web::Window, mut frame_ctx: FrameContext) -> LoopHandle {
    let state = Rc::new(LoopState {
        running: Cell::new(true),
        pending: Cell::new(None),
        tick: RefCell::new(None),
    });

    let state_tick = state.clone();
    let window_tick = window.clone();
    *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        state_tick.pending.set(None);
        if !state_tick.running.get() {
            return;
        }
        frame_ctx.frame();
        state_tick.schedule(&window_tick);
    }) as Box<dyn FnMut()>));

    state.schedule(window);
    LoopHandle {
        window: window.clone(),
        state,
    }
}
