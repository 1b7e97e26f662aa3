//! Shooting stars: short gradient lines that race diagonally and fade out.

use glam::DVec2;
use rand::Rng;

use crate::constants::*;
use crate::surface::{DrawSurface, GradientStop, SurfaceSize, GLOW_BLUE, STAR_WHITE};

#[derive(Clone, Debug, PartialEq)]
pub struct Streak {
    /// Head of the streak.
    pub position: DVec2,
    pub angle: f64,
    pub length: f64,
    pub speed: f64,
    pub opacity: f64,
}

impl Streak {
    /// New streak starting in the upper half of a `size` surface.
    pub fn spawn<R: Rng + ?Sized>(size: SurfaceSize, rng: &mut R) -> Self {
        Self {
            position: DVec2::new(
                rng.gen::<f64>() * size.width,
                rng.gen::<f64>() * size.height / 2.0,
            ),
            angle: STREAK_ANGLE,
            length: STREAK_LENGTH_MIN + rng.gen::<f64>() * STREAK_LENGTH_SPAN,
            speed: STREAK_SPEED_MIN + rng.gen::<f64>() * STREAK_SPEED_SPAN,
            opacity: 1.0,
        }
    }

    /// Unit vector along the direction of travel.
    pub fn direction(&self) -> DVec2 {
        DVec2::from_angle(self.angle)
    }

    /// End of the trail, `length` behind the head.
    pub fn tail(&self) -> DVec2 {
        self.position - self.direction() * self.length
    }
}

/// Advance one frame; returns whether the streak is still alive.
pub fn update_streak(s: &mut Streak, size: SurfaceSize) -> bool {
    s.position += s.direction() * s.speed;
    s.opacity -= STREAK_FADE_PER_FRAME;
    s.opacity > 0.0 && s.position.x <= size.width && s.position.y <= size.height
}

/// Stroke the trail: bright head, blue middle, transparent tail.
pub fn draw_streak<S: DrawSurface + ?Sized>(s: &Streak, surface: &mut S) {
    let stops = [
        GradientStop {
            offset: 0.0,
            color: STAR_WHITE.with_alpha(s.opacity),
        },
        GradientStop {
            offset: 0.5,
            color: GLOW_BLUE.with_alpha(s.opacity * STREAK_MID_OPACITY_SCALE),
        },
        GradientStop {
            offset: 1.0,
            color: STAR_WHITE.with_alpha(0.0),
        },
    ];
    surface.stroke_gradient_line(s.position, s.tail(), STREAK_LINE_WIDTH, &stops);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_starts_in_upper_half() {
        let size = SurfaceSize::new(1200.0, 800.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let s = Streak::spawn(size, &mut rng);
            assert!((0.0..1200.0).contains(&s.position.x));
            assert!((0.0..400.0).contains(&s.position.y));
            assert!((40.0..120.0).contains(&s.length));
            assert!((10.0..20.0).contains(&s.speed));
            assert_eq!(s.opacity, 1.0);
        }
    }

    #[test]
    fn travels_diagonally() {
        let size = SurfaceSize::new(1000.0, 1000.0);
        let mut s = Streak {
            position: DVec2::new(10.0, 10.0),
            angle: STREAK_ANGLE,
            length: 50.0,
            speed: 10.0,
            opacity: 1.0,
        };
        assert!(update_streak(&mut s, size));
        let step = 10.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((s.position.x - (10.0 + step)).abs() < 1e-9);
        assert!((s.position.y - (10.0 + step)).abs() < 1e-9);
    }

    #[test]
    fn dies_when_leaving_either_edge() {
        let size = SurfaceSize::new(100.0, 1000.0);
        let mut s = Streak {
            position: DVec2::new(95.0, 10.0),
            angle: STREAK_ANGLE,
            length: 50.0,
            speed: 10.0,
            opacity: 1.0,
        };
        assert!(!update_streak(&mut s, size));

        let size = SurfaceSize::new(1000.0, 100.0);
        let mut s = Streak {
            position: DVec2::new(10.0, 95.0),
            ..s
        };
        assert!(!update_streak(&mut s, size));
    }
}
