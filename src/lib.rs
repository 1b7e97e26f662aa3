#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::{Field, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod debounce;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod stats;

/// A mounted starfield. Runs until [`Starfield::stop`] is called or the
/// handle is dropped (`free()` from JS), which stops it the same way.
#[wasm_bindgen]
pub struct Starfield {
    window: web::Window,
    render_loop: frame::LoopHandle,
    pointer: events::PointerTracker,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Starfield {
    /// Bind to the canvas with id `canvas_id` and the glow element matched by
    /// `glow_selector`, then start animating.
    pub fn mount(canvas_id: &str, glow_selector: &str) -> Result<Starfield, JsValue> {
        mount(canvas_id, glow_selector).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.render_loop.is_running()
    }

    /// Stop rendering and detach every listener. Idempotent.
    pub fn stop(&mut self) {
        self.render_loop.stop();
        self.pointer.detach();
        if let Some(cb) = self.on_resize.take() {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Starfield {
    fn drop(&mut self) {
        // Listeners must go before the closures they point at are freed.
        self.stop();
    }
}

fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    sim: &Rc<RefCell<Simulation>>,
) -> Closure<dyn FnMut()> {
    let canvas = canvas.clone();
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move || {
        let size = dom::sync_canvas_to_viewport(&canvas);
        sim.borrow_mut().resize(size);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure
}

fn mount(canvas_id: &str, glow_selector: &str) -> anyhow::Result<Starfield> {
    let window = dom::window()?;
    let document = dom::window_document()?;

    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let glow = overlay::GlowOverlay::new(dom::html_element(&document, glow_selector)?);

    let size = dom::sync_canvas_to_viewport(&canvas);
    let field = Field::with_rng(size, StdRng::from_entropy());
    let sim = Rc::new(RefCell::new(Simulation::from_field(field)));
    log::info!(
        "[starfield] mounted on #{} at {:.0}x{:.0} with {} particles",
        canvas_id,
        size.width,
        size.height,
        sim.borrow().field.particles.len()
    );

    let on_resize = wire_canvas_resize(&window, &canvas, &sim);
    let pointer = events::PointerTracker::attach(&window, &document, sim.clone(), glow);
    let render_loop = frame::start_loop(
        &window,
        frame::FrameContext::new(sim, render::CanvasSurface::new(ctx)),
    );

    Ok(Starfield {
        window,
        render_loop,
        pointer,
        on_resize: Some(on_resize),
    })
}

/// Resolves once the window `load` event has fired.
async fn page_loaded(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() == "complete" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let cb = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = window.add_event_listener_with_callback("load", cb.unchecked_ref());
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::window_document()?;
    page_loaded(&window, &document).await?;

    if document.get_element_by_id(constants::CANVAS_ID).is_none() {
        log::info!(
            "no #{} canvas on this page; waiting for Starfield.mount",
            constants::CANVAS_ID
        );
        return Ok(());
    }
    let starfield = mount(constants::CANVAS_ID, constants::GLOW_SELECTOR)?;
    // The page-owned starfield runs for the lifetime of the page.
    std::mem::forget(starfield);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}
