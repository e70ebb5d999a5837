//! Input routing module
//!
//! Provides the pointer state machine for drag, resize, and marquee
//! selection gestures.

mod router;
mod drag;
mod result;
mod selection;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;
pub use selection::Selection;

use crate::math::{Size, Vec2};
use crate::window::WindowRegion;

/// Calculate the requested position and size for a resize gesture
///
/// The result is unconstrained: flooring at the minimum size, keeping the
/// opposite edge fixed, and clamping to the desktop happen in
/// [`WindowManager::resize`](crate::window::WindowManager::resize).
pub fn calculate_resize(
    handle: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
) -> (Vec2, Size) {
    let mut new_pos = start_pos;
    let mut new_size = start_size;

    if !handle.is_resize() {
        return (new_pos, new_size);
    }

    if handle.moves_left_edge() {
        new_pos.x = start_pos.x + delta.x;
        new_size.width = start_size.width - delta.x;
    } else if matches!(handle, WindowRegion::ResizeE | WindowRegion::ResizeNE | WindowRegion::ResizeSE) {
        new_size.width = start_size.width + delta.x;
    }

    if handle.moves_top_edge() {
        new_pos.y = start_pos.y + delta.y;
        new_size.height = start_size.height - delta.y;
    } else if matches!(handle, WindowRegion::ResizeS | WindowRegion::ResizeSE | WindowRegion::ResizeSW) {
        new_size.height = start_size.height + delta.y;
    }

    (new_pos, new_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_south() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeS,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(0.0, 50.0),
        );
        assert!((pos.x - 100.0).abs() < 0.001);
        assert!((pos.y - 100.0).abs() < 0.001);
        assert!((size.width - 400.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeN,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(0.0, -50.0),
        );
        assert!((pos.y - 50.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_west_moves_both_leading_edges() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeNW,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(30.0, 20.0),
        );
        assert!((pos.x - 130.0).abs() < 0.001);
        assert!((pos.y - 120.0).abs() < 0.001);
        assert!((size.width - 370.0).abs() < 0.001);
        assert!((size.height - 280.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_south_east_keeps_origin() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeSE,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(-30.0, 40.0),
        );
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert!((size.width - 370.0).abs() < 0.001);
        assert!((size.height - 340.0).abs() < 0.001);
    }

    #[test]
    fn test_non_resize_region_is_unchanged() {
        let (pos, size) = calculate_resize(
            WindowRegion::TitleBar,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(30.0, 30.0),
        );
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert_eq!(size, Size::new(400.0, 300.0));
    }
}
