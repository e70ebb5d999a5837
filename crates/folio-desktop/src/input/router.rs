//! Input router state machine

use crate::math::{Size, Vec2};
use crate::window::{WindowId, WindowRegion};
use super::DragState;

/// Input router managing drag state
///
/// At most one gesture is active; starting another replaces it.
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start marquee selection
    pub fn start_marquee(&mut self, start: Vec2) {
        self.drag = Some(DragState::Marquee { start });
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { window_id, offset });
    }

    /// Start window resize operation
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_mouse: Vec2,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_mouse,
        });
    }

    /// Arm an icon press; it becomes a drag on the first move
    pub fn start_icon_press(&mut self, icon_id: &str, offset: Vec2) {
        self.drag = Some(DragState::MoveIcon {
            icon_id: icon_id.to_string(),
            offset,
            moved: false,
        });
    }

    /// Record that the armed icon has been dragged
    pub fn mark_icon_moved(&mut self) {
        if let Some(DragState::MoveIcon { moved, .. }) = &mut self.drag {
            *moved = true;
        }
    }

    /// End current drag operation, handing back its final state
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Drop the gesture if it targets `window_id`
    ///
    /// Returns whether a gesture was cancelled.
    pub fn cancel_for_window(&mut self, window_id: WindowId) -> bool {
        let targets = self
            .drag
            .as_ref()
            .and_then(DragState::window_id)
            .is_some_and(|id| id == window_id);
        if targets {
            self.drag = None;
        }
        targets
    }
}
