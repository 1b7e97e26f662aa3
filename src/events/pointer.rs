use crate::constants::POINTER_SETTLE_MS;
use crate::debounce::SettleDebounce;
use crate::overlay::GlowOverlay;
use starfield_core::Simulation;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Document-level mouse listeners that publish cursor state and steer the
/// glow overlay. Keeps its closures alive until it is dropped; call
/// [`PointerTracker::detach`] first so nothing still points at them.
pub struct PointerTracker {
    window: web::Window,
    document: web::Document,
    on_move: Closure<dyn FnMut(web::MouseEvent)>,
    on_leave: Closure<dyn FnMut()>,
    // Held only so the timer callback outlives every scheduled timeout.
    _settle: Closure<dyn FnMut(JsValue)>,
    debounce: Rc<RefCell<SettleDebounce>>,
    detached: Cell<bool>,
}

impl PointerTracker {
    pub fn attach(
        window: &web::Window,
        document: &web::Document,
        sim: Rc<RefCell<Simulation>>,
        glow: GlowOverlay,
    ) -> Self {
        let debounce = Rc::new(RefCell::new(SettleDebounce::default()));

        let settle = {
            let sim = sim.clone();
            let debounce = debounce.clone();
            Closure::wrap(Box::new(move |token: JsValue| {
                let Some(token) = token.as_f64() else {
                    return;
                };
                if debounce.borrow_mut().fire(token as u32) {
                    sim.borrow_mut().pointer_settled();
                }
            }) as Box<dyn FnMut(JsValue)>)
        };
        let settle_fn: js_sys::Function =
            settle.as_ref().unchecked_ref::<js_sys::Function>().clone();

        let on_move = {
            let window = window.clone();
            let debounce = debounce.clone();
            let glow = glow.clone();
            Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                let x = ev.client_x() as f64;
                let y = ev.client_y() as f64;
                sim.borrow_mut().pointer_moved(x, y);
                glow.follow(x, y);

                let restart = debounce.borrow_mut().restart();
                if let Some(handle) = restart.cancel {
                    window.clear_timeout_with_handle(handle);
                }
                match window.set_timeout_with_callback_and_timeout_and_arguments_1(
                    &settle_fn,
                    POINTER_SETTLE_MS,
                    &JsValue::from(restart.token),
                ) {
                    Ok(handle) => debounce.borrow_mut().armed(restart.token, handle),
                    Err(e) => log::warn!("[pointer] settle timer not scheduled: {:?}", e),
                }
            }) as Box<dyn FnMut(_)>)
        };

        let on_leave = Closure::wrap(Box::new(move || {
            glow.hide();
        }) as Box<dyn FnMut()>);

        _ = document
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        _ = document
            .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());

        Self {
            window: window.clone(),
            document: document.clone(),
            on_move,
            on_leave,
            _settle: settle,
            debounce,
            detached: Cell::new(false),
        }
    }

    /// Remove the listeners and clear any pending settle timer. Idempotent.
    pub fn detach(&self) {
        if self.detached.replace(true) {
            return;
        }
        _ = self.document.remove_event_listener_with_callback(
            "mousemove",
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = self.document.remove_event_listener_with_callback(
            "mouseleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
        if let Some(handle) = self.debounce.borrow_mut().cancel() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
