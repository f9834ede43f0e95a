//! File and bytes based entry points, one builder per operation.

pub mod capacity;
pub mod detect;
pub mod hide;
pub mod unveil;
pub mod unveil_raw;

mod shared;

pub use shared::*;
