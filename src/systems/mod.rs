//! Systems operating on particle state.

pub mod particles;
pub mod physics;
pub mod temperature;
