//! Window region for hit testing

use crate::math::{Rect, Vec2};

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area (for interaction)
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize button
    MaximizeButton,
    /// North (top) resize edge
    ResizeN,
    /// South (bottom) resize edge
    ResizeS,
    /// East (right) resize edge
    ResizeE,
    /// West (left) resize edge
    ResizeW,
    /// Northeast corner
    ResizeNE,
    /// Northwest corner
    ResizeNW,
    /// Southeast corner
    ResizeSE,
    /// Southwest corner
    ResizeSW,
}

impl WindowRegion {
    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        self.direction().is_some()
    }

    /// Whether dragging this handle moves the window's left edge
    #[inline]
    pub fn moves_left_edge(&self) -> bool {
        matches!(
            self,
            WindowRegion::ResizeW | WindowRegion::ResizeNW | WindowRegion::ResizeSW
        )
    }

    /// Whether dragging this handle moves the window's top edge
    #[inline]
    pub fn moves_top_edge(&self) -> bool {
        matches!(
            self,
            WindowRegion::ResizeN | WindowRegion::ResizeNW | WindowRegion::ResizeNE
        )
    }

    /// Compass direction of a resize handle ("n", "se", ...)
    pub fn direction(&self) -> Option<&'static str> {
        match self {
            WindowRegion::ResizeN => Some("n"),
            WindowRegion::ResizeS => Some("s"),
            WindowRegion::ResizeE => Some("e"),
            WindowRegion::ResizeW => Some("w"),
            WindowRegion::ResizeNE => Some("ne"),
            WindowRegion::ResizeNW => Some("nw"),
            WindowRegion::ResizeSE => Some("se"),
            WindowRegion::ResizeSW => Some("sw"),
            _ => None,
        }
    }

    /// Parse a compass direction into a resize handle
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(WindowRegion::ResizeN),
            "s" => Some(WindowRegion::ResizeS),
            "e" => Some(WindowRegion::ResizeE),
            "w" => Some(WindowRegion::ResizeW),
            "ne" => Some(WindowRegion::ResizeNE),
            "nw" => Some(WindowRegion::ResizeNW),
            "se" => Some(WindowRegion::ResizeSE),
            "sw" => Some(WindowRegion::ResizeSW),
            _ => None,
        }
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::ResizeN | WindowRegion::ResizeS => "ns-resize",
            WindowRegion::ResizeE | WindowRegion::ResizeW => "ew-resize",
            WindowRegion::ResizeNE | WindowRegion::ResizeSW => "nesw-resize",
            WindowRegion::ResizeNW | WindowRegion::ResizeSE => "nwse-resize",
        }
    }

    /// Pick the resize handle under `pos`, if it lies within `threshold`
    /// of an edge of `rect`
    ///
    /// Corners win over edges; when a window is narrower than two bands
    /// the left and top edges take precedence.
    pub fn resize_handle_at(rect: &Rect, pos: Vec2, threshold: f32) -> Option<Self> {
        if !rect.contains(pos) {
            return None;
        }

        let near_left = pos.x < rect.x + threshold;
        let near_right = !near_left && pos.x >= rect.right() - threshold;
        let near_top = pos.y < rect.y + threshold;
        let near_bottom = !near_top && pos.y >= rect.bottom() - threshold;

        match (near_top, near_bottom, near_left, near_right) {
            (true, _, true, _) => Some(WindowRegion::ResizeNW),
            (true, _, _, true) => Some(WindowRegion::ResizeNE),
            (_, true, true, _) => Some(WindowRegion::ResizeSW),
            (_, true, _, true) => Some(WindowRegion::ResizeSE),
            (true, _, _, _) => Some(WindowRegion::ResizeN),
            (_, true, _, _) => Some(WindowRegion::ResizeS),
            (_, _, true, _) => Some(WindowRegion::ResizeW),
            (_, _, _, true) => Some(WindowRegion::ResizeE),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(100.0, 100.0, 400.0, 300.0);

    #[test]
    fn test_resize_handle_edges() {
        let at = |x, y| WindowRegion::resize_handle_at(&RECT, Vec2::new(x, y), 8.0);

        assert_eq!(at(300.0, 102.0), Some(WindowRegion::ResizeN));
        assert_eq!(at(300.0, 396.0), Some(WindowRegion::ResizeS));
        assert_eq!(at(103.0, 250.0), Some(WindowRegion::ResizeW));
        assert_eq!(at(495.0, 250.0), Some(WindowRegion::ResizeE));
    }

    #[test]
    fn test_resize_handle_corners() {
        let at = |x, y| WindowRegion::resize_handle_at(&RECT, Vec2::new(x, y), 8.0);

        assert_eq!(at(101.0, 101.0), Some(WindowRegion::ResizeNW));
        assert_eq!(at(498.0, 101.0), Some(WindowRegion::ResizeNE));
        assert_eq!(at(101.0, 398.0), Some(WindowRegion::ResizeSW));
        assert_eq!(at(498.0, 398.0), Some(WindowRegion::ResizeSE));
    }

    #[test]
    fn test_resize_handle_interior_and_outside() {
        assert_eq!(WindowRegion::resize_handle_at(&RECT, Vec2::new(300.0, 250.0), 8.0), None);
        assert_eq!(WindowRegion::resize_handle_at(&RECT, Vec2::new(50.0, 50.0), 8.0), None);
    }

    #[test]
    fn test_direction_round_trip_and_cursor() {
        for dir in ["n", "s", "e", "w", "ne", "nw", "se", "sw"] {
            let region = WindowRegion::from_direction(dir).unwrap();
            assert!(region.is_resize());
            assert_eq!(region.direction(), Some(dir));
        }
        assert!(WindowRegion::from_direction("up").is_none());
        assert!(!WindowRegion::TitleBar.is_resize());
        assert_eq!(WindowRegion::ResizeNW.cursor(), "nwse-resize");
    }

    #[test]
    fn test_edge_movement_flags() {
        assert!(WindowRegion::ResizeW.moves_left_edge());
        assert!(WindowRegion::ResizeSW.moves_left_edge());
        assert!(!WindowRegion::ResizeE.moves_left_edge());
        assert!(WindowRegion::ResizeNE.moves_top_edge());
        assert!(!WindowRegion::ResizeS.moves_top_edge());
    }
}
