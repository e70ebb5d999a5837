//! Window struct and frame geometry

use serde::Serialize;
use crate::config::DesktopConfig;
use crate::math::{Rect, Size, Vec2};
use crate::service::WindowContent;
use super::WindowId;

/// A window on the desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Service that populates this window
    pub service_id: String,
    /// Window title
    pub title: String,
    /// Tagged payload for the renderer
    pub content: WindowContent,
    /// Top-left corner in desktop coordinates
    pub position: Vec2,
    /// Outer size including the frame
    pub size: Size,
    /// Position saved before maximizing
    pub original_position: Vec2,
    /// Size saved before maximizing
    pub original_size: Size,
    /// Resize floor
    pub min_size: Size,
    /// Stacking order (higher = on top)
    pub z_index: u32,
    /// Hidden but kept in the list
    pub minimized: bool,
    /// Filling the desktop area
    pub maximized: bool,
    /// Owning window, set for sub-windows
    pub parent: Option<WindowId>,
}

impl Window {
    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether marquee selection may pick this window
    #[inline]
    pub fn is_selectable(&self) -> bool {
        !self.minimized && !self.maximized
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self, frame: &DesktopConfig) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            frame.title_bar_height.min(self.size.height),
        )
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self, frame: &DesktopConfig) -> Rect {
        self.button_rect(frame, 0)
    }

    /// Get the maximize button rectangle
    pub fn maximize_button_rect(&self, frame: &DesktopConfig) -> Rect {
        self.button_rect(frame, 1)
    }

    /// Get the minimize button rectangle
    pub fn minimize_button_rect(&self, frame: &DesktopConfig) -> Rect {
        self.button_rect(frame, 2)
    }

    /// Title-bar button `slot`, counted from the right edge
    fn button_rect(&self, frame: &DesktopConfig, slot: u8) -> Rect {
        let slot = f32::from(slot);
        let x = self.position.x + self.size.width
            - frame.button_margin
            - frame.button_size * (slot + 1.0)
            - frame.button_spacing * slot;
        let y = self.position.y + (frame.title_bar_height - frame.button_size) / 2.0;
        Rect::new(x, y, frame.button_size, frame.button_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_window() -> Window {
        Window {
            id: 1,
            service_id: "contact".to_string(),
            title: "Contact Me".to_string(),
            content: WindowContent::ContactForm,
            position: Vec2::new(100.0, 100.0),
            size: Size::new(500.0, 400.0),
            original_position: Vec2::new(100.0, 100.0),
            original_size: Size::new(500.0, 400.0),
            min_size: Size::new(200.0, 150.0),
            z_index: 100,
            minimized: false,
            maximized: false,
            parent: None,
        }
    }

    #[test]
    fn test_window_rect() {
        let w = create_test_window();
        let r = w.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.width - 500.0).abs() < 0.001);
        assert!((r.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_title_bar_rect() {
        let frame = DesktopConfig::default();
        let w = create_test_window();
        let r = w.title_bar_rect(&frame);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.height - frame.title_bar_height).abs() < 0.001);
    }

    #[test]
    fn test_buttons_laid_out_right_to_left() {
        let frame = DesktopConfig::default();
        let w = create_test_window();

        let close = w.close_button_rect(&frame);
        let maximize = w.maximize_button_rect(&frame);
        let minimize = w.minimize_button_rect(&frame);

        assert!((close.right() - (600.0 - frame.button_margin)).abs() < 0.001);
        assert!((maximize.right() - (close.x - frame.button_spacing)).abs() < 0.001);
        assert!((minimize.right() - (maximize.x - frame.button_spacing)).abs() < 0.001);
        assert!(close.y > w.position.y);
    }

    #[test]
    fn test_selectable_flags() {
        let mut w = create_test_window();
        assert!(w.is_selectable());
        w.minimized = true;
        assert!(!w.is_selectable());
        w.minimized = false;
        w.maximized = true;
        assert!(!w.is_selectable());
    }
}
