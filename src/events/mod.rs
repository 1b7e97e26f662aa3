pub mod pointer;

pub use pointer::PointerTracker;
