//! The star field: owns every particle and streak and decides when they are
//! created.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::constants::*;
use crate::particle::Particle;
use crate::streak::Streak;
use crate::surface::SurfaceSize;

/// Live streaks, never more than [`MAX_STREAKS`], so they stay inline.
pub type Streaks = SmallVec<[Streak; MAX_STREAKS]>;

/// Number of particles a surface of `size` gets.
pub fn particle_count(size: SurfaceSize) -> usize {
    let divisor = if size.is_narrow() {
        MOBILE_AREA_PER_PARTICLE
    } else {
        DESKTOP_AREA_PER_PARTICLE
    };
    let count = (size.area() / divisor).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

pub struct Field {
    size: SurfaceSize,
    pub particles: Vec<Particle>,
    streaks: Streaks,
    rng: StdRng,
}

impl Field {
    /// Field for `size`, seeded deterministically.
    pub fn new(size: SurfaceSize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    /// Field for `size` drawing randomness from `rng`.
    pub fn with_rng(size: SurfaceSize, rng: StdRng) -> Self {
        let mut field = Self {
            size,
            particles: Vec::new(),
            streaks: Streaks::new(),
            rng,
        };
        field.populate();
        field
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Live streaks, oldest first.
    pub fn streaks(&self) -> &[Streak] {
        &self.streaks
    }

    /// Add `streak` unless the field already holds [`MAX_STREAKS`]. Returns
    /// whether it was added.
    pub fn push_streak(&mut self, streak: Streak) -> bool {
        if self.streaks.len() >= MAX_STREAKS {
            return false;
        }
        self.streaks.push(streak);
        true
    }

    /// Keep only the streaks for which `keep` returns true, in order.
    pub fn retain_streaks(&mut self, keep: impl FnMut(&mut Streak) -> bool) {
        self.streaks.retain(keep);
    }

    /// Adopt a new surface size and rebuild the particle collection from
    /// scratch. Live streaks are kept; they die on their own.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.populate();
        log::debug!(
            "[field] resized to {:.0}x{:.0}, {} particles",
            size.width,
            size.height,
            self.particles.len()
        );
    }

    fn populate(&mut self) {
        let count = particle_count(self.size);
        let size = self.size;
        let rng = &mut self.rng;
        self.particles.clear();
        self.particles.reserve(count);
        self.particles
            .extend((0..count).map(|_| Particle::spawn(size, &mut *rng)));
    }

    /// Run one Bernoulli trial for a new streak. Returns whether one spawned.
    pub fn maybe_spawn_streak(&mut self) -> bool {
        if self.size.is_narrow() || self.streaks.len() >= MAX_STREAKS {
            return false;
        }
        if !self.rng.gen_bool(STREAK_SPAWN_CHANCE) {
            return false;
        }
        let streak = Streak::spawn(self.size, &mut self.rng);
        log::debug!(
            "[field] streak at ({:.0},{:.0}) speed={:.1}",
            streak.position.x,
            streak.position.y,
            streak.speed
        );
        self.push_streak(streak)
    }

    /// Split borrow used by the frame driver: particles, streaks and the rng
    /// at the same time.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Particle], &mut Streaks, &mut StdRng) {
        (self.particles.as_mut_slice(), &mut self.streaks, &mut self.rng)
    }
}
