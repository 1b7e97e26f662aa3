//! Canvas 2D backend for the starfield.

use glam::DVec2;
use starfield_core::{DrawSurface, GradientStop, Rgba, SurfaceSize};
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

/// Draws onto a `CanvasRenderingContext2d`. Canvas errors are ignored; a
/// dropped stroke only costs one frame of decoration.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_gradient_line(&mut self, from: DVec2, to: DVec2, width: f64, stops: &[GradientStop]) {
        let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }

        #[allow(deprecated)]
        self.ctx.set_stroke_style(&gradient);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}
