// Tuning constants for the starfield simulation.

// Field density (surface units squared per particle)
pub const DESKTOP_AREA_PER_PARTICLE: f64 = 3000.0;
pub const MOBILE_AREA_PER_PARTICLE: f64 = 5000.0;
pub const NARROW_SURFACE_WIDTH: f64 = 768.0; // below this a surface counts as mobile

// Particle spawn ranges
pub const PARTICLE_SIZE_MAX: f64 = 2.0;
pub const PARTICLE_SPEED_MIN: f64 = 0.1;
pub const PARTICLE_SPEED_SPAN: f64 = 0.5;
pub const PARTICLE_OPACITY_MIN: f64 = 0.5;
pub const PARTICLE_OPACITY_SPAN: f64 = 0.5;
pub const TWINKLE_SPEED_MIN: f64 = 0.01;
pub const TWINKLE_SPEED_SPAN: f64 = 0.02;

// Twinkle reflection bounds
pub const TWINKLE_OPACITY_LOW: f64 = 0.3;
pub const TWINKLE_OPACITY_HIGH: f64 = 1.0;

// Cursor repulsion
pub const REPULSION_RADIUS: f64 = 150.0;
pub const REPULSION_STRENGTH: f64 = 2.0; // impulse at zero distance
pub const REPULSION_GROWTH: f64 = 0.5; // size gain at full force

// Integration
pub const VELOCITY_DAMPING: f64 = 0.95;
pub const SPRING_RETURN: f64 = 0.01; // share of the offset to base closed per frame
pub const DRIFT_FACTOR: f64 = 0.2;
pub const RECYCLE_MARGIN: f64 = 10.0; // how far past an edge the base may travel

// Particle drawing
pub const GLOW_SIZE_THRESHOLD: f64 = 1.5;
pub const GLOW_RADIUS_SCALE: f64 = 2.0;
pub const GLOW_OPACITY_SCALE: f64 = 0.2;

// Streaks
pub const MAX_STREAKS: usize = 3;
pub const STREAK_SPAWN_CHANCE: f64 = 0.001; // per frame
pub const STREAK_ANGLE: f64 = std::f64::consts::FRAC_PI_4;
pub const STREAK_LENGTH_MIN: f64 = 40.0;
pub const STREAK_LENGTH_SPAN: f64 = 80.0;
pub const STREAK_SPEED_MIN: f64 = 10.0;
pub const STREAK_SPEED_SPAN: f64 = 10.0;
pub const STREAK_FADE_PER_FRAME: f64 = 0.02;
pub const STREAK_LINE_WIDTH: f64 = 2.0;
pub const STREAK_MID_OPACITY_SCALE: f64 = 0.6;
