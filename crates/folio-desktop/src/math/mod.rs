//! Core geometry types for the desktop
//!
//! All coordinates are desktop-relative pixels with the origin at the
//! top-left corner of the desktop area.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
