use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Axis-aligned arena rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub bottom_left: Vec2,
    pub top_right: Vec2,
}

impl Bounds {
    pub fn new(bottom_left: Vec2, top_right: Vec2) -> Self {
        Self { bottom_left, top_right }
    }

    /// Rectangle of the given size centred on the origin.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            bottom_left: Vec2::new(-width * 0.5, -height * 0.5),
            top_right: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        (self.top_right.x - self.bottom_left.x).abs()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        (self.top_right.y - self.bottom_left.y).abs()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.top_right + self.bottom_left) * 0.5
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.bottom_left.x
            && p.x <= self.top_right.x
            && p.y >= self.bottom_left.y
            && p.y <= self.top_right.y
    }
}
