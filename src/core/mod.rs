//! Core building blocks shared by every system: math, logging, errors.

#[macro_use]
pub mod utils;
pub mod error;
pub mod math;

pub use error::{ConfigError, ConfigResult};
pub use math::Vec2;
