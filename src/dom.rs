use starfield_core::SurfaceSize;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(String),
    #[error("element {0} has the wrong type")]
    WrongElementType(String),
    #[error("2d context unavailable on #{0}")]
    NoContext2d(String),
}

#[inline]
pub fn window() -> Result<web::Window, DomError> {
    web::window().ok_or(DomError::NoWindow)
}

#[inline]
pub fn window_document() -> Result<web::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(format!("#{id}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| DomError::WrongElementType(format!("#{id}")))
}

pub fn html_element(
    document: &web::Document,
    selector: &str,
) -> Result<web::HtmlElement, DomError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| DomError::WrongElementType(selector.to_string()))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, DomError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| DomError::NoContext2d(canvas.id()))
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> SurfaceSize {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    SurfaceSize::new(w, h)
}

/// Size the canvas backing store to the viewport and return the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let Some(w) = web::window() else {
        return SurfaceSize::new(canvas.width() as f64, canvas.height() as f64);
    };
    let size = viewport_size(&w);
    canvas.set_width(size.width as u32);
    canvas.set_height(size.height as u32);
    SurfaceSize::new(canvas.width() as f64, canvas.height() as f64)
}
