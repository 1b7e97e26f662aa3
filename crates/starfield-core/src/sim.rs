//! Per-frame simulation context shared by the render loop and the pointer
//! tracker.

use crate::cursor::CursorState;
use crate::field::Field;
use crate::particle::{draw_particle, update_particle};
use crate::streak::{draw_streak, update_streak};
use crate::surface::{DrawSurface, SurfaceSize};

/// What a single frame did; used for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub particles: usize,
    pub streaks: usize,
    pub spawned_streak: bool,
}

/// Cursor state plus the field it acts on.
pub struct Simulation {
    pub cursor: CursorState,
    pub field: Field,
}

impl Simulation {
    pub fn new(size: SurfaceSize, seed: u64) -> Self {
        Self::from_field(Field::new(size, seed))
    }

    pub fn from_field(field: Field) -> Self {
        Self {
            cursor: CursorState::default(),
            field,
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.field.resize(size);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.cursor.record_move(x, y);
    }

    pub fn pointer_settled(&mut self) {
        self.cursor.settle();
    }

    /// Run one frame: clear, maybe spawn a streak, update and draw every
    /// particle in order, then draw and update streaks, dropping dead ones.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> FrameSummary {
        let size = self.field.size();
        surface.clear(size);

        let spawned_streak = self.field.maybe_spawn_streak();

        let cursor = self.cursor;
        let (particles, streaks, rng) = self.field.parts_mut();
        for p in particles.iter_mut() {
            update_particle(p, &cursor, size, rng);
            draw_particle(p, surface);
        }

        // Streaks are drawn at their pre-update position.
        streaks.retain(|s| {
            draw_streak(s, surface);
            update_streak(s, size)
        });

        FrameSummary {
            particles: particles.len(),
            streaks: streaks.len(),
            spawned_streak,
        }
    }
}
