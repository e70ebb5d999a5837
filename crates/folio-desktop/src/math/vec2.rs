//! 2D vector type for positions and pointer offsets

use serde::{Deserialize, Serialize};

/// 2D vector for positions and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Origin of the desktop
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise absolute difference
    #[inline]
    pub fn abs_diff(self, other: Vec2) -> Vec2 {
        Vec2::new((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    /// Offset by a fixed amount on both axes
    #[inline]
    pub fn offset(self, amount: f32) -> Vec2 {
        Vec2::new(self.x + amount, self.y + amount)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_add_sub() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert!((sum.x - 4.0).abs() < 0.001);
        assert!((sum.y - 6.0).abs() < 0.001);

        let diff = a - b;
        assert!((diff.x - (-2.0)).abs() < 0.001);
        assert!((diff.y - (-2.0)).abs() < 0.001);
    }

    #[test]
    fn test_vec2_min_and_abs_diff() {
        let a = Vec2::new(10.0, 50.0);
        let b = Vec2::new(30.0, 20.0);

        let min = a.min(b);
        assert!((min.x - 10.0).abs() < 0.001);
        assert!((min.y - 20.0).abs() < 0.001);

        let diff = a.abs_diff(b);
        assert!((diff.x - 20.0).abs() < 0.001);
        assert!((diff.y - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_offset() {
        let v = Vec2::new(100.0, 120.0).offset(50.0);
        assert_eq!(v, Vec2::new(150.0, 170.0));
    }
}
