use serde::{Deserialize, Serialize};

/// Lengths below this are treated as zero by `normalized`.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// 2D vector used for positions, velocities and forces.
///
/// `#[repr(C)]` so a `Vec<Vec2>` can be handed to the renderer as an
/// interleaved `[x0, y0, x1, y1, ...]` f32 buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction.
    /// Near-zero vectors are returned unchanged instead of producing NaN.
    #[inline]
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            return *self;
        }
        Self { x: self.x / len, y: self.y / len }
    }

    /// Unit vector pointing at `angle` radians from +x.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl std::ops::DivAssign<f32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_componentwise() {
        let a = Vec2::new(3.0, -2.0);
        let b = Vec2::new(1.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 2.0));
        assert_eq!(a - b, Vec2::new(2.0, -6.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, -4.0));
        assert_eq!(a / 2.0, Vec2::new(1.5, -1.0));
        assert_eq!(-a, Vec2::new(-3.0, 2.0));

        let mut c = a;
        c += b;
        c -= Vec2::new(1.0, 1.0);
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vec2::new(1.5, 0.5));
    }

    #[test]
    fn length_and_dot() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.dot(Vec2::new(1.0, 0.0)), 3.0);
    }

    #[test]
    fn normalized_is_unit_length() {
        let n = Vec2::new(10.0, 0.0).normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(n, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normalized_leaves_tiny_vectors_untouched() {
        let tiny = Vec2::new(1e-8, -1e-8);
        assert_eq!(tiny.normalized(), tiny);
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn from_angle_points_along_axes() {
        let up = Vec2::from_angle(std::f32::consts::FRAC_PI_2);
        assert!(up.x.abs() < 1e-6);
        assert!((up.y - 1.0).abs() < 1e-6);
    }
}
