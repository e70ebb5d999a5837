//! Marquee selection state

use std::collections::BTreeSet;
use serde::Serialize;
use crate::math::Rect;
use crate::window::{Window, WindowId};

/// Rubber-band rectangle and the items it currently covers
///
/// The rectangle only exists while the gesture runs; the selected sets
/// outlive it until the next press clears them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Normalized rectangle while a marquee gesture is active
    pub rect: Option<Rect>,
    /// Selected window ids
    pub windows: BTreeSet<WindowId>,
    /// Selected icon ids
    pub icons: BTreeSet<String>,
}

impl Selection {
    /// Drop the rectangle and every selected item
    pub fn clear(&mut self) {
        self.rect = None;
        self.windows.clear();
        self.icons.clear();
    }

    /// Replace the rectangle and recompute what it overlaps
    ///
    /// Minimized and maximized windows are never picked. A zero-area
    /// rectangle overlaps nothing.
    pub fn update<'a, W, I>(&mut self, rect: Rect, windows: W, icons: I)
    where
        W: IntoIterator<Item = &'a Window>,
        I: IntoIterator<Item = (&'a str, Rect)>,
    {
        self.rect = Some(rect);
        self.windows = windows
            .into_iter()
            .filter(|w| w.is_selectable() && rect.intersects(&w.rect()))
            .map(|w| w.id)
            .collect();
        self.icons = icons
            .into_iter()
            .filter(|(_, bounds)| rect.intersects(bounds))
            .map(|(id, _)| id.to_string())
            .collect();
    }

    /// End the gesture, keeping the selected items
    #[inline]
    pub fn finish(&mut self) {
        self.rect = None;
    }

    /// Forget a window that no longer exists
    pub fn remove_window(&mut self, id: WindowId) {
        self.windows.remove(&id);
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty() && self.icons.is_empty()
    }

    /// Whether a window is selected
    #[inline]
    pub fn contains_window(&self, id: WindowId) -> bool {
        self.windows.contains(&id)
    }

    /// Whether an icon is selected
    #[inline]
    pub fn contains_icon(&self, id: &str) -> bool {
        self.icons.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vec2};
    use crate::service::WindowContent;

    fn window_at(id: WindowId, x: f32, y: f32) -> Window {
        Window {
            id,
            service_id: format!("service-{}", id),
            title: "Test".to_string(),
            content: WindowContent::ContactForm,
            position: Vec2::new(x, y),
            size: Size::new(200.0, 150.0),
            original_position: Vec2::new(x, y),
            original_size: Size::new(200.0, 150.0),
            min_size: Size::new(200.0, 150.0),
            z_index: 100 + id as u32,
            minimized: false,
            maximized: false,
            parent: None,
        }
    }

    #[test]
    fn test_update_selects_overlapping_items() {
        let windows = vec![window_at(1, 100.0, 100.0), window_at(2, 800.0, 600.0)];
        let icons = vec![
            ("browser", Rect::new(20.0, 20.0, 100.0, 100.0)),
            ("contact", Rect::new(20.0, 420.0, 100.0, 100.0)),
        ];

        let mut selection = Selection::default();
        selection.update(Rect::new(50.0, 50.0, 100.0, 100.0), &windows, icons);

        assert!(selection.contains_window(1));
        assert!(!selection.contains_window(2));
        assert!(selection.contains_icon("browser"));
        assert!(!selection.contains_icon("contact"));
    }

    #[test]
    fn test_update_skips_minimized_and_maximized() {
        let mut minimized = window_at(1, 100.0, 100.0);
        minimized.minimized = true;
        let mut maximized = window_at(2, 0.0, 0.0);
        maximized.maximized = true;
        let windows = vec![minimized, maximized];

        let mut selection = Selection::default();
        selection.update(Rect::new(0.0, 0.0, 500.0, 500.0), &windows, Vec::<(&str, Rect)>::new());

        assert!(selection.is_empty());
    }

    #[test]
    fn test_zero_area_selects_nothing() {
        let windows = vec![window_at(1, 100.0, 100.0)];
        let icons = vec![("browser", Rect::new(20.0, 20.0, 100.0, 100.0))];

        let mut selection = Selection::default();
        selection.update(Rect::new(150.0, 150.0, 0.0, 0.0), &windows, icons);

        assert!(selection.is_empty());
        assert!(selection.rect.is_some());
    }

    #[test]
    fn test_finish_keeps_items() {
        let windows = vec![window_at(1, 100.0, 100.0)];
        let mut selection = Selection::default();
        selection.update(Rect::new(0.0, 0.0, 300.0, 300.0), &windows, Vec::<(&str, Rect)>::new());

        selection.finish();
        assert!(selection.rect.is_none());
        assert!(selection.contains_window(1));

        selection.clear();
        assert!(selection.is_empty());
    }
}
