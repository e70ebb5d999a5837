//! Input handling for pointer events and drag operations

use tracing::debug;
use crate::input::{calculate_resize, DragState, InputResult};
use crate::math::{Rect, Vec2};
use crate::window::{WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Start move drag
    pub fn start_move_drag(&mut self, id: WindowId, x: f32, y: f32) {
        let window_position = match self.windows.get(id) {
            Some(window) if !window.maximized => window.position,
            _ => return,
        };
        if self.viewport().is_mobile() {
            return;
        }

        let offset = Vec2::new(x, y) - window_position;
        self.windows.focus(id);
        self.input.start_window_move(id, offset);
    }

    /// Start resize drag
    pub fn start_resize_drag(&mut self, id: WindowId, direction: &str, x: f32, y: f32) {
        let Some(handle) = WindowRegion::from_direction(direction) else {
            return;
        };
        self.begin_resize(id, handle, Vec2::new(x, y));
    }

    /// Handle pointer down
    ///
    /// Every press closes the start menu and clears the previous selection.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        if button != 0 {
            return InputResult::Unhandled;
        }

        let pos = Vec2::new(x, y);
        self.close_start_menu();
        self.selection.clear();

        if let Some((window_id, region)) = self.windows.region_at(pos) {
            return self.handle_window_press(window_id, region, pos);
        }

        if let Some(icon) = self.icons.icon_at(pos) {
            let offset = pos - icon.position;
            let icon_id = icon.id.clone();
            self.input.start_icon_press(&icon_id, offset);
            return InputResult::Handled;
        }

        self.input.start_marquee(pos);
        self.update_marquee(pos, pos);
        InputResult::Handled
    }

    /// Dispatch a press that landed on a window
    fn handle_window_press(&mut self, window_id: WindowId, region: WindowRegion, pos: Vec2) -> InputResult {
        match region {
            WindowRegion::CloseButton => InputResult::Closed {
                window_ids: self.close_window(window_id),
            },
            WindowRegion::MinimizeButton => {
                self.minimize_window(window_id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.maximize_window(window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                self.focus_window(window_id);
                self.start_title_bar_drag(window_id, pos);
                InputResult::Handled
            }
            WindowRegion::Content => {
                self.focus_window(window_id);
                match self.windows.get(window_id) {
                    Some(window) => {
                        let local = pos - window.position;
                        InputResult::Forward {
                            window_id,
                            local_x: local.x,
                            local_y: local.y,
                        }
                    }
                    None => InputResult::Unhandled,
                }
            }
            handle => {
                self.begin_resize(window_id, handle, pos);
                InputResult::Handled
            }
        }
    }

    /// Arm a move gesture from the title bar of an already focused window
    fn start_title_bar_drag(&mut self, window_id: WindowId, pos: Vec2) {
        let mobile = self.viewport().is_mobile();
        match self.windows.get(window_id) {
            Some(window) if !window.maximized && !mobile => {
                let offset = pos - window.position;
                self.input.start_window_move(window_id, offset);
            }
            _ => {}
        }
    }

    /// Focus a window and arm a resize gesture on one of its edges
    fn begin_resize(&mut self, window_id: WindowId, handle: WindowRegion, pos: Vec2) {
        if !handle.is_resize() || self.viewport().is_mobile() {
            return;
        }
        let (start_pos, start_size) = match self.windows.get(window_id) {
            Some(window) if !window.maximized => (window.position, window.size),
            _ => return,
        };
        self.windows.focus(window_id);
        self.input.start_window_resize(window_id, handle, start_pos, start_size, pos);
    }

    /// Recompute the marquee rectangle and what it covers
    fn update_marquee(&mut self, start: Vec2, current: Vec2) {
        let rect = Rect::from_corners(start, current);
        self.selection
            .update(rect, self.windows.all_windows(), self.icons.hit_boxes());
    }

    /// CSS cursor for a hover position
    ///
    /// While a gesture runs its cursor wins over whatever is underneath.
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        match self.input.drag_state() {
            Some(DragState::MoveWindow { .. }) => return WindowRegion::TitleBar.cursor(),
            Some(DragState::ResizeWindow { handle, .. }) => return handle.cursor(),
            Some(DragState::MoveIcon { moved: true, .. }) => return "grabbing",
            _ => {}
        }

        let pos = Vec2::new(x, y);
        let mobile = self.viewport().is_mobile();
        match self.windows.region_at(pos) {
            Some((_, region)) if mobile && (region.is_resize() || region == WindowRegion::TitleBar) => "default",
            Some((_, region)) => region.cursor(),
            None if self.icons.icon_at(pos).is_some() => "pointer",
            None => "default",
        }
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);

        let Some(drag_state) = self.input.drag_state().cloned() else {
            return InputResult::Unhandled;
        };

        if let Some(window_id) = drag_state.window_id() {
            if self.windows.get(window_id).is_none() {
                debug!(window_id, "gesture target vanished");
                self.input.end_drag();
                return InputResult::Unhandled;
            }
        }

        match drag_state {
            DragState::Marquee { start } => {
                self.update_marquee(start, pos);
            }
            DragState::MoveWindow { window_id, offset } => {
                self.windows.move_window(window_id, pos - offset);
            }
            DragState::ResizeWindow { window_id, handle, start_pos, start_size, start_mouse } => {
                let delta = pos - start_mouse;
                let (new_pos, new_size) = calculate_resize(handle, start_pos, start_size, delta);
                self.windows.resize(window_id, new_size, new_pos);
            }
            DragState::MoveIcon { icon_id, offset, .. } => {
                self.icons.move_icon(&icon_id, pos - offset, self.windows.viewport());
                self.input.mark_icon_moved();
            }
        }
        InputResult::Handled
    }

    /// Handle pointer up
    ///
    /// An icon released without moving opens its service.
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            None => InputResult::Unhandled,
            Some(DragState::Marquee { .. }) => {
                self.selection.finish();
                InputResult::Handled
            }
            Some(DragState::MoveIcon { icon_id, moved: false, .. }) => match self.open(&icon_id) {
                Some(window_id) => InputResult::Opened { window_id },
                None => InputResult::Handled,
            },
            Some(_) => InputResult::Handled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    fn create_test_engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.init(1920.0, 1080.0);
        engine
    }

    /// Opens the contact form and moves it to (x, y); 500x400
    fn create_test_window(engine: &mut DesktopEngine, x: f32, y: f32) -> WindowId {
        let id = engine.open("contact").unwrap();
        engine.move_window(id, x, y);
        id
    }

    #[test]
    fn test_pointer_down_non_primary_button_unhandled() {
        let mut engine = create_test_engine();
        let result = engine.handle_pointer_down(900.0, 700.0, 2);

        assert_eq!(result, InputResult::Unhandled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_pointer_down_on_background_starts_marquee() {
        let mut engine = create_test_engine();
        engine.toggle_start_menu();

        let result = engine.handle_pointer_down(900.0, 700.0, 0);

        assert_eq!(result, InputResult::Handled);
        assert!(matches!(engine.input.drag_state(), Some(DragState::Marquee { .. })));
        assert!(!engine.is_start_menu_open());
        assert!(engine.selection.is_empty());
    }

    #[test]
    fn test_marquee_selects_and_persists_after_release() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, 800.0, 300.0);

        engine.handle_pointer_down(700.0, 200.0, 0);
        engine.handle_pointer_move(850.0, 350.0);
        assert!(engine.selection.contains_window(id));
        assert!(engine.selection.rect.is_some());

        engine.handle_pointer_up();
        assert!(engine.selection.rect.is_none());
        assert!(engine.selection.contains_window(id));

        // Next press elsewhere clears it
        engine.handle_pointer_down(1500.0, 900.0, 0);
        assert!(engine.selection.is_empty());
    }

    #[test]
    fn test_marquee_picks_icons() {
        let mut engine = create_test_engine();

        engine.handle_pointer_down(10.0, 10.0, 0);
        engine.handle_pointer_move(130.0, 60.0);

        assert!(engine.selection.contains_icon("personal-documents"));
        assert!(engine.selection.contains_icon("browser"));
        assert!(!engine.selection.contains_icon("music-maker"));
    }

    #[test]
    fn test_title_bar_drag_moves_window() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, 300.0, 300.0);

        let result = engine.handle_pointer_down(400.0, 310.0, 0);
        assert_eq!(result, InputResult::Handled);
        assert!(engine.input.drag_state().is_some_and(|d| d.is_move()));

        engine.handle_pointer_move(500.0, 360.0);
        let window = engine.windows.get(id).unwrap();
        assert!((window.position.x - 400.0).abs() < 0.001);
        assert!((window.position.y - 350.0).abs() < 0.001);

        engine.handle_pointer_up();
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_drag_is_clamped() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, 300.0, 300.0);

        engine.handle_pointer_down(400.0, 310.0, 0);
        engine.handle_pointer_move(-500.0, 5000.0);

        let window = engine.windows.get(id).unwrap();
        assert!((window.position.x - 0.0).abs() < 0.001);
        assert!((window.position.y - 640.0).abs() < 0.001);
    }

    #[test]
    fn test_press_focuses_window() {
        let mut engine = create_test_engine();
        let below = create_test_window(&mut engine, 300.0, 300.0);
        let above = engine.open("browser").unwrap();
        engine.move_window(above, 1000.0, 300.0);
        assert_eq!(engine.windows.focused(), Some(above));

        let result = engine.handle_pointer_down(400.0, 500.0, 0);
        assert!(result.is_forward());
        assert_eq!(engine.windows.focused(), Some(below));
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_close_button_press_closes() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, 300.0, 300.0);

        // Close button sits 4px in from the right edge
        let result = engine.handle_pointer_down(788.0, 312.0, 0);
        assert_eq!(result, InputResult::Closed { window_ids: vec![id] });
        assert_eq!(engine.windows.count(), 0);
    }

    #[test]
    fn test_edge_drag_resizes_with_floor() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, 300.0, 300.0);

        // West edge, dragged far right
        engine.handle_pointer_down(302.0, 500.0, 0);
        assert!(engine.input.drag_state().is_some_and(|d| d.is_resize()));
        engine.handle_pointer_move(1200.0, 500.0);

        let window = engine.windows.get(id).unwrap();
        assert_eq!(window.size, Size::new(200.0, 400.0));
        assert!((window.rect().right() - 800.0).abs() < 0.001);
    }

    #[test]
    fn test_edge_drag_stops_at_screen_edge() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, 300.0, 300.0);

        engine.handle_pointer_down(302.0, 500.0, 0);
        engine.handle_pointer_move(-100.0, 500.0);

        let window = engine.windows.get(id).unwrap();
        assert!((window.position.x - 0.0).abs() < 0.001);
        assert!((window.rect().right() - 800.0).abs() < 0.001);
    }

    #[test]
    fn test_no_gestures_on_mobile() {
        let mut engine = create_test_engine();
        engine.on_viewport_resize(600.0, 900.0);
        let id = engine.open("contact").unwrap();

        engine.handle_pointer_down(100.0, 10.0, 0);
        assert!(!engine.input.is_dragging());
        assert_eq!(engine.windows.focused(), Some(id));

        engine.start_resize_drag(id, "se", 590.0, 390.0);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_icon_click_opens_service() {
        let mut engine = create_test_engine();

        // Browser icon sits at (120, 20)
        engine.handle_pointer_down(150.0, 50.0, 0);
        let result = engine.handle_pointer_up();

        let window_id = engine.windows.find_by_service("browser").unwrap().id;
        assert_eq!(result, InputResult::Opened { window_id });
    }

    #[test]
    fn test_icon_drag_does_not_open() {
        let mut engine = create_test_engine();

        engine.handle_pointer_down(150.0, 50.0, 0);
        engine.handle_pointer_move(450.0, 350.0);
        let result = engine.handle_pointer_up();

        assert_eq!(result, InputResult::Handled);
        assert_eq!(engine.windows.count(), 0);
        assert_eq!(engine.icons.get("browser").unwrap().position, Vec2::new(420.0, 320.0));
    }

    #[test]
    fn test_move_after_target_closed_ends_gesture() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, 300.0, 300.0);
        engine.handle_pointer_down(400.0, 310.0, 0);

        // Closed behind the router's back
        engine.windows.close(id);

        assert_eq!(engine.handle_pointer_move(500.0, 400.0), InputResult::Unhandled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_cursor_at() {
        let mut engine = create_test_engine();
        create_test_window(&mut engine, 300.0, 300.0);

        assert_eq!(engine.cursor_at(400.0, 310.0), "move");
        assert_eq!(engine.cursor_at(302.0, 500.0), "ew-resize");
        assert_eq!(engine.cursor_at(150.0, 50.0), "pointer");
        assert_eq!(engine.cursor_at(1500.0, 900.0), "default");

        // A resize keeps its cursor even when the pointer leaves the edge
        engine.handle_pointer_down(302.0, 500.0, 0);
        assert_eq!(engine.cursor_at(1500.0, 900.0), "ew-resize");
    }

    #[test]
    fn test_start_drag_helpers() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, 100.0, 100.0);

        engine.start_move_drag(id, 150.0, 130.0);
        assert!(engine.input.drag_state().is_some_and(|d| d.is_move()));
        engine.input.end_drag();

        for dir in ["n", "s", "e", "w", "ne", "nw", "se", "sw"] {
            engine.start_resize_drag(id, dir, 500.0, 500.0);
            assert!(engine.input.is_dragging(), "Failed to start resize for direction: {}", dir);
            engine.input.end_drag();
        }

        engine.start_resize_drag(id, "invalid", 500.0, 500.0);
        assert!(!engine.input.is_dragging());
    }
}
