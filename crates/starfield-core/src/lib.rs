//! Starfield simulation: twinkling stars that shy away from the cursor and the
//! occasional shooting star.
//!
//! Everything here is platform independent. A frontend supplies a
//! [`DrawSurface`], feeds pointer activity into [`Simulation`], and calls
//! [`Simulation::frame`] once per display refresh.

pub mod constants;
pub mod cursor;
pub mod field;
pub mod particle;
pub mod sim;
pub mod streak;
pub mod surface;

pub use constants::*;
pub use cursor::*;
pub use field::*;
pub use particle::*;
pub use sim::*;
pub use streak::*;
pub use surface::*;
