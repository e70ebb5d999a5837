//! Drag state for input operations

use crate::math::{Size, Vec2};
use crate::window::{WindowId, WindowRegion};

/// Current drag operation state
#[derive(Clone, Debug)]
pub enum DragState {
    /// Rubber-band selection over the desktop background
    Marquee {
        /// Press position
        start: Vec2,
    },
    /// Moving a window by its title bar
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
    },
    /// Resizing a window
    ResizeWindow {
        /// Window being resized
        window_id: WindowId,
        /// Which resize handle
        handle: WindowRegion,
        /// Window position at start
        start_pos: Vec2,
        /// Window size at start
        start_size: Size,
        /// Mouse position at start
        start_mouse: Vec2,
    },
    /// Pressing or dragging a desktop icon
    MoveIcon {
        /// Icon under the press
        icon_id: String,
        /// Offset from icon origin to cursor
        offset: Vec2,
        /// Set by the first pointer move; a release without it is a click
        moved: bool,
    },
}

impl DragState {
    /// Check if this is a marquee selection
    #[inline]
    pub fn is_marquee(&self) -> bool {
        matches!(self, DragState::Marquee { .. })
    }

    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Get the window ID if this is a window operation
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            DragState::MoveWindow { window_id, .. } => Some(*window_id),
            DragState::ResizeWindow { window_id, .. } => Some(*window_id),
            _ => None,
        }
    }

    /// Get the icon ID if this is an icon press
    pub fn icon_id(&self) -> Option<&str> {
        match self {
            DragState::MoveIcon { icon_id, .. } => Some(icon_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marquee_state() {
        let state = DragState::Marquee { start: Vec2::new(100.0, 100.0) };

        assert!(state.is_marquee());
        assert!(!state.is_move());
        assert!(!state.is_resize());
        assert!(state.window_id().is_none());
        assert!(state.icon_id().is_none());
    }

    #[test]
    fn test_move_window_state() {
        let state = DragState::MoveWindow {
            window_id: 42,
            offset: Vec2::new(10.0, 20.0),
        };

        assert!(!state.is_marquee());
        assert!(state.is_move());
        assert!(!state.is_resize());
        assert_eq!(state.window_id(), Some(42));
    }

    #[test]
    fn test_resize_window_preserves_all_fields() {
        let state = DragState::ResizeWindow {
            window_id: 99,
            handle: WindowRegion::ResizeNW,
            start_pos: Vec2::new(50.0, 75.0),
            start_size: Size::new(400.0, 300.0),
            start_mouse: Vec2::new(60.0, 85.0),
        };

        assert!(state.is_resize());
        if let DragState::ResizeWindow { window_id, handle, start_pos, start_size, start_mouse } = state {
            assert_eq!(window_id, 99);
            assert_eq!(handle, WindowRegion::ResizeNW);
            assert!((start_pos.x - 50.0).abs() < 0.001);
            assert!((start_pos.y - 75.0).abs() < 0.001);
            assert!((start_size.width - 400.0).abs() < 0.001);
            assert!((start_size.height - 300.0).abs() < 0.001);
            assert!((start_mouse.x - 60.0).abs() < 0.001);
            assert!((start_mouse.y - 85.0).abs() < 0.001);
        } else {
            panic!("Expected ResizeWindow state");
        }
    }

    #[test]
    fn test_move_icon_state() {
        let state = DragState::MoveIcon {
            icon_id: "browser".to_string(),
            offset: Vec2::new(15.5, 25.5),
            moved: false,
        };

        assert_eq!(state.icon_id(), Some("browser"));
        assert!(state.window_id().is_none());
        if let DragState::MoveIcon { offset, moved, .. } = state {
            assert!((offset.x - 15.5).abs() < 0.001);
            assert!((offset.y - 25.5).abs() < 0.001);
            assert!(!moved);
        } else {
            panic!("Expected MoveIcon state");
        }
    }
}
