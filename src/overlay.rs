use web_sys as web;

/// Cursor glow element that follows the pointer.
#[derive(Clone)]
pub struct GlowOverlay {
    el: web::HtmlElement,
}

impl GlowOverlay {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }

    /// Center the glow on `(x, y)` and make it visible.
    #[inline]
    pub fn follow(&self, x: f64, y: f64) {
        let style = self.el.style();
        _ = style.set_property("left", &format!("{x}px"));
        _ = style.set_property("top", &format!("{y}px"));
        _ = style.set_property("opacity", "1");
    }

    #[inline]
    pub fn hide(&self) {
        _ = self.el.style().set_property("opacity", "0");
    }
}
