// Page wiring and timing for the web frontend.

// Elements the starfield binds to when mounted automatically
pub const CANVAS_ID: &str = "universe";
pub const GLOW_SELECTOR: &str = ".cursor-glow";

// Pointer is "moving" until this long after the last mousemove
pub const POINTER_SETTLE_MS: i32 = 100;

// Frame statistics are logged at debug level once per window
pub const FRAME_STATS_INTERVAL_SEC: f64 = 5.0;
