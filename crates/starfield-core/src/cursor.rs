use glam::DVec2;

/// Last known pointer position and whether it moved recently.
///
/// Written only by the pointer tracker; every particle reads it during update.
/// The "recently moved" flag is cleared by the tracker's debounce timer, not
/// by the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub position: DVec2,
    pub moving: bool,
}

impl CursorState {
    /// Record a pointer move to `(x, y)`.
    pub fn record_move(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
        self.moving = true;
    }

    /// Debounce expiry: the pointer has been still long enough.
    pub fn settle(&mut self) {
        self.moving = false;
    }
}
