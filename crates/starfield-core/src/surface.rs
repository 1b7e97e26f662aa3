//! Drawing surface abstraction and the colors the starfield paints with.
//!
//! The simulation never talks to a canvas directly. Each entity draws through
//! [`DrawSurface`], which the web frontend implements on top of a 2D canvas
//! context and tests implement with simple recorders.

use glam::DVec2;

use crate::constants::NARROW_SURFACE_WIDTH;

/// Straight (non-premultiplied) RGBA color with an `f64` alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` form accepted by canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Star core color.
pub const STAR_WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
/// Blue-white halo used for star glows and streak bodies.
pub const GLOW_BLUE: Rgba = Rgba::new(150, 200, 255, 1.0);

/// A color stop on a linear gradient; `offset` runs from 0 (start) to 1 (end).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Size of the drawing surface in surface units (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Narrow surfaces get a sparser field and no streaks.
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_SURFACE_WIDTH
    }
}

/// The minimal set of 2D raster operations the starfield needs.
pub trait DrawSurface {
    /// Clear the whole `size` region to transparent.
    fn clear(&mut self, size: SurfaceSize);

    /// Fill a circle centered at `center`.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);

    /// Stroke a straight line whose color follows a linear gradient running
    /// from `from` (offset 0) to `to` (offset 1).
    fn stroke_gradient_line(&mut self, from: DVec2, to: DVec2, width: f64, stops: &[GradientStop]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form_keeps_fractional_alpha() {
        assert_eq!(GLOW_BLUE.with_alpha(0.25).to_css(), "rgba(150, 200, 255, 0.25)");
        assert_eq!(STAR_WHITE.with_alpha(0.0).to_css(), "rgba(255, 255, 255, 0)");
    }

    #[test]
    fn narrow_threshold_is_exclusive() {
        assert!(SurfaceSize::new(767.0, 1000.0).is_narrow());
        assert!(!SurfaceSize::new(768.0, 1000.0).is_narrow());
    }
}
