mod vec2;

pub use vec2::{Vec2, NORMALIZE_EPSILON};
