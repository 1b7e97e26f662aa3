// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use starfield_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn density_is_lower_on_narrow_surfaces() {
    assert!(MOBILE_AREA_PER_PARTICLE > DESKTOP_AREA_PER_PARTICLE);
    assert!(DESKTOP_AREA_PER_PARTICLE > 0.0);
    assert!(NARROW_SURFACE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn twinkle_band_fits_spawn_opacity() {
    assert!(TWINKLE_OPACITY_LOW < TWINKLE_OPACITY_HIGH);
    assert!(PARTICLE_OPACITY_MIN >= TWINKLE_OPACITY_LOW);
    assert!(PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN <= TWINKLE_OPACITY_HIGH);
    // a single twinkle step must be much smaller than the band
    let band = TWINKLE_OPACITY_HIGH - TWINKLE_OPACITY_LOW;
    assert!(TWINKLE_SPEED_MIN + TWINKLE_SPEED_SPAN < band / 10.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_stable() {
    assert!(VELOCITY_DAMPING > 0.0 && VELOCITY_DAMPING < 1.0);
    assert!(SPRING_RETURN > 0.0 && SPRING_RETURN < 1.0);
    assert!(REPULSION_RADIUS > 0.0);
    assert!(REPULSION_GROWTH > 0.0);
    // full-force growth must reach the glow threshold for the largest stars
    assert!(PARTICLE_SIZE_MAX * (1.0 + REPULSION_GROWTH) > GLOW_SIZE_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn streak_lifetime_is_fifty_frames() {
    assert_eq!((1.0 / STREAK_FADE_PER_FRAME).round() as u32, 50);
    assert!(STREAK_SPAWN_CHANCE > 0.0 && STREAK_SPAWN_CHANCE < 1.0);
    assert_eq!(MAX_STREAKS, 3);
    assert!((STREAK_ANGLE.to_degrees() - 45.0).abs() < 1e-9);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_timings_are_positive() {
    assert!(POINTER_SETTLE_MS > 0);
    assert!(FRAME_STATS_INTERVAL_SEC > 0.0);
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(GLOW_SELECTOR.starts_with('.'));
}
