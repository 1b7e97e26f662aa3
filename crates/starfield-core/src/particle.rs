//! Twinkling, drifting, cursor-repelled stars.

use glam::DVec2;
use rand::Rng;

use crate::constants::*;
use crate::cursor::CursorState;
use crate::surface::{DrawSurface, SurfaceSize, GLOW_BLUE, STAR_WHITE};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    /// Anchor the particle springs back to; drifts upward every frame.
    pub base: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub base_size: f64,
    pub opacity: f64,
    /// Signed; flips whenever opacity leaves the twinkle band.
    pub twinkle_speed: f64,
    /// Upward drift rate of the anchor.
    pub speed: f64,
}

impl Particle {
    /// A fresh star somewhere on a `size` surface.
    ///
    /// The current `y` is drawn independently of the anchor, so a new star
    /// glides toward its base over its first frames.
    pub fn spawn<R: Rng + ?Sized>(size: SurfaceSize, rng: &mut R) -> Self {
        let base = DVec2::new(rng.gen::<f64>() * size.width, rng.gen::<f64>() * size.height);
        let base_size = rng.gen::<f64>() * PARTICLE_SIZE_MAX;
        let speed = PARTICLE_SPEED_MIN + rng.gen::<f64>() * PARTICLE_SPEED_SPAN;
        let opacity = PARTICLE_OPACITY_MIN + rng.gen::<f64>() * PARTICLE_OPACITY_SPAN;
        let twinkle_speed = TWINKLE_SPEED_MIN + rng.gen::<f64>() * TWINKLE_SPEED_SPAN;
        let y = rng.gen::<f64>() * size.height;
        Self {
            position: DVec2::new(base.x, y),
            base,
            velocity: DVec2::ZERO,
            size: base_size,
            base_size,
            opacity,
            twinkle_speed,
            speed,
        }
    }

    /// Still particle with explicit state; handy for scripted scenes.
    pub fn at_rest(
        base: DVec2,
        base_size: f64,
        opacity: f64,
        twinkle_speed: f64,
        speed: f64,
    ) -> Self {
        Self {
            position: base,
            base,
            velocity: DVec2::ZERO,
            size: base_size,
            base_size,
            opacity,
            twinkle_speed,
            speed,
        }
    }

    /// Whether the draw pass adds a halo under this star.
    pub fn has_glow(&self) -> bool {
        self.size > GLOW_SIZE_THRESHOLD
    }
}

/// Advance `p` by one frame against the current cursor state.
pub fn update_particle<R: Rng + ?Sized>(
    p: &mut Particle,
    cursor: &CursorState,
    size: SurfaceSize,
    rng: &mut R,
) {
    // Twinkle: reflect at the band edges rather than clamp.
    p.opacity += p.twinkle_speed;
    if p.opacity > TWINKLE_OPACITY_HIGH || p.opacity < TWINKLE_OPACITY_LOW {
        p.twinkle_speed = -p.twinkle_speed;
    }

    let delta = cursor.position - p.position;
    let distance = delta.length();
    if distance < REPULSION_RADIUS && cursor.moving {
        let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
        let angle = delta.y.atan2(delta.x);
        p.velocity -= DVec2::from_angle(angle) * force * REPULSION_STRENGTH;
        p.size = p.base_size * (1.0 + force * REPULSION_GROWTH);
    } else {
        p.size = p.base_size;
    }

    p.velocity *= VELOCITY_DAMPING;
    p.position += p.velocity;
    p.position += (p.base - p.position) * SPRING_RETURN;

    p.base.y -= p.speed * DRIFT_FACTOR;
    if p.base.y < -RECYCLE_MARGIN {
        // Only the anchor jumps; the spring carries the star there.
        p.base.y = size.height + RECYCLE_MARGIN;
        p.base.x = rng.gen::<f64>() * size.width;
    }
}

/// Paint `p` as a filled dot, plus a faint halo for the larger stars.
pub fn draw_particle<S: DrawSurface + ?Sized>(p: &Particle, surface: &mut S) {
    surface.fill_circle(p.position, p.size, STAR_WHITE.with_alpha(p.opacity));
    if p.has_glow() {
        surface.fill_circle(
            p.position,
            p.size * GLOW_RADIUS_SCALE,
            GLOW_BLUE.with_alpha(p.opacity * GLOW_OPACITY_SCALE),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SURFACE: SurfaceSize = SurfaceSize::new(1500.0, 1000.0);

    #[test]
    fn spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(SURFACE, &mut rng);
            assert!((0.0..SURFACE.width).contains(&p.base.x));
            assert!((0.0..SURFACE.height).contains(&p.base.y));
            assert!((0.0..SURFACE.height).contains(&p.position.y));
            assert_eq!(p.position.x, p.base.x);
            assert!((0.0..PARTICLE_SIZE_MAX).contains(&p.base_size));
            assert!((0.5..1.0).contains(&p.opacity));
            assert!((0.01..0.03).contains(&p.twinkle_speed));
            assert!((0.1..0.6).contains(&p.speed));
            assert_eq!(p.velocity, DVec2::ZERO);
        }
    }

    #[test]
    fn twinkle_reverses_above_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::at_rest(DVec2::new(500.0, 500.0), 1.0, 0.99, 0.02, 0.0);
        update_particle(&mut p, &CursorState::default(), SURFACE, &mut rng);
        assert!((p.opacity - 1.01).abs() < 1e-12);
        assert!(p.twinkle_speed < 0.0);
        update_particle(&mut p, &CursorState::default(), SURFACE, &mut rng);
        assert!((p.opacity - 0.99).abs() < 1e-12);
    }

    #[test]
    fn idle_cursor_leaves_size_at_base() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::at_rest(DVec2::new(100.0, 100.0), 1.8, 0.7, 0.01, 0.3);
        p.size = 2.5;
        let cursor = CursorState {
            position: DVec2::new(100.0, 100.0),
            moving: false,
        };
        update_particle(&mut p, &cursor, SURFACE, &mut rng);
        assert_eq!(p.size, p.base_size);
        assert_eq!(p.velocity, DVec2::ZERO);
    }

    #[test]
    fn repulsion_pushes_away_from_cursor() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::at_rest(DVec2::new(200.0, 300.0), 1.0, 0.7, 0.01, 0.0);
        let cursor = CursorState {
            position: DVec2::new(250.0, 300.0),
            moving: true,
        };
        update_particle(&mut p, &cursor, SURFACE, &mut rng);
        // cursor is to the right, so the star is shoved left
        assert!(p.velocity.x < 0.0);
        assert!(p.velocity.y.abs() < 1e-9);
        assert!(p.position.x < 200.0);
        let force = (150.0 - 50.0) / 150.0;
        assert!((p.size - (1.0 + force * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn recycling_moves_only_the_anchor() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::at_rest(DVec2::new(40.0, -9.95), 1.0, 0.7, 0.01, 0.5);
        p.position = DVec2::new(40.0, 5.0);
        update_particle(&mut p, &CursorState::default(), SURFACE, &mut rng);
        assert_eq!(p.base.y, SURFACE.height + 10.0);
        assert!((0.0..SURFACE.width).contains(&p.base.x));
        // spring pulled position 1% toward the old anchor, no jump
        assert!(p.position.y < 5.0 && p.position.y > 4.0);
        assert!((p.position.x - 40.0).abs() < 1e-12);
    }

    #[test]
    fn glow_only_for_large_stars() {
        let small = Particle::at_rest(DVec2::ZERO, 1.5, 1.0, 0.01, 0.1);
        let large = Particle::at_rest(DVec2::ZERO, 1.6, 1.0, 0.01, 0.1);
        assert!(!small.has_glow());
        assert!(large.has_glow());
    }
}
