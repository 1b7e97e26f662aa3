/// Rolling frame counter that reports once per interval.
///
/// Kept free of browser types so it can be exercised on the host.
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    frames: u32,
    elapsed_sec: f64,
    streaks_spawned: u32,
}

/// One completed reporting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub fps: f64,
    pub frames: u32,
    pub streaks_spawned: u32,
}

impl FrameStats {
    /// Account for one frame that took `dt_sec`. Returns a report, and starts
    /// a new window, once `interval_sec` has been covered.
    pub fn record(
        &mut self,
        dt_sec: f64,
        spawned_streak: bool,
        interval_sec: f64,
    ) -> Option<FrameReport> {
        self.frames += 1;
        self.elapsed_sec += dt_sec.max(0.0);
        if spawned_streak {
            self.streaks_spawned += 1;
        }
        if self.elapsed_sec < interval_sec {
            return None;
        }
        let report = FrameReport {
            fps: self.frames as f64 / self.elapsed_sec,
            frames: self.frames,
            streaks_spawned: self.streaks_spawned,
        };
        *self = Self::default();
        Some(report)
    }
}
