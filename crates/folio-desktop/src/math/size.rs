//! 2D size type for window and icon dimensions

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative on either axis
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Raise each dimension to at least `floor`
    #[inline]
    pub fn at_least(self, floor: Size) -> Self {
        Self::new(self.width.max(floor.width), self.height.max(floor.height))
    }

    /// Lower each dimension to at most `cap`
    #[inline]
    pub fn at_most(self, cap: Size) -> Self {
        Self::new(self.width.min(cap.width), self.height.min(cap.height))
    }
}
