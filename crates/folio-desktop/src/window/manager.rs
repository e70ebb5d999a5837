//! Window manager for lifecycle, z-order, and geometry constraints

use std::collections::HashMap;
use tracing::debug;
use crate::config::DesktopConfig;
use crate::math::{Size, Vec2};
use crate::service::ServiceDescriptor;
use crate::viewport::Viewport;
use super::{Window, WindowConfig, WindowId, WindowRegion};

/// Window manager handling window lifecycle, z-order, and clamping
///
/// Windows are kept in open order. Every operation taking a window id
/// silently ignores ids it doesn't know.
pub struct WindowManager {
    /// All windows in the order they were opened
    windows: Vec<Window>,
    /// Sub-windows by owning window
    children: HashMap<WindowId, Vec<WindowId>>,
    /// Top-level window for each open service
    by_service: HashMap<String, WindowId>,
    /// Screen and desktop area used for clamping
    viewport: Viewport,
    /// Layout constants
    config: DesktopConfig,
    /// Next window ID
    next_id: WindowId,
    /// Next z-index value
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl WindowManager {
    /// Create a window manager with a default-sized viewport
    pub fn new(config: DesktopConfig) -> Self {
        let viewport = Viewport::with_config(1920.0, 1080.0, &config);
        Self {
            windows: Vec::new(),
            children: HashMap::new(),
            by_service: HashMap::new(),
            viewport,
            next_id: 1,
            next_z: config.initial_z_index,
            config,
        }
    }

    /// Current viewport
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Layout constants
    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Hand out the next z-index
    fn take_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Create a new window and put it on top
    pub fn create(&mut self, config: WindowConfig) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let min_size = config.min_size();
        let area = self.viewport.desktop_size();
        let (position, size) = if self.viewport.is_mobile() {
            (Vec2::ZERO, Size::new(area.width, config.size.height.min(area.height)))
        } else {
            let size = self.viewport.fit_size(config.size);
            let requested = config
                .position
                .unwrap_or_else(|| self.config.cascade_position(self.windows.len()));
            (self.viewport.clamp_position(requested, size), size)
        };

        let z_index = self.take_z();

        if let Some(parent) = config.parent {
            self.children.entry(parent).or_default().push(id);
        } else {
            self.by_service.insert(config.service_id.clone(), id);
        }

        debug!(id, service = %config.service_id, z_index, "window created");

        self.windows.push(Window {
            id,
            service_id: config.service_id,
            title: config.title,
            content: config.content,
            position,
            size,
            original_position: position,
            original_size: size,
            min_size,
            z_index,
            minimized: false,
            maximized: false,
            parent: config.parent,
        });

        id
    }

    /// Open a service, reusing its window when one exists
    ///
    /// An existing window is un-minimized and brought to the front; the
    /// z-index counter advances exactly once either way.
    pub fn open(&mut self, service: &ServiceDescriptor) -> WindowId {
        if let Some(&id) = self.by_service.get(&service.id) {
            self.restore(id);
            return id;
        }
        self.create(WindowConfig::from_service(service))
    }

    /// Close a window together with its sub-windows
    ///
    /// Returns the ids that were removed, empty if `id` was unknown.
    pub fn close(&mut self, id: WindowId) -> Vec<WindowId> {
        let Some(window) = self.get(id) else {
            return Vec::new();
        };
        let parent = window.parent;
        let service_id = window.service_id.clone();

        let mut removed = vec![id];
        removed.extend(self.children.remove(&id).unwrap_or_default());
        for child in &removed[1..] {
            self.children.remove(child);
        }

        if let Some(parent) = parent {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|&sibling| sibling != id);
            }
        } else if self.by_service.get(&service_id) == Some(&id) {
            self.by_service.remove(&service_id);
        }

        self.windows.retain(|w| !removed.contains(&w.id));
        debug!(id, removed = removed.len(), "window closed");
        removed
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Get a mutable window by ID
    pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Top-level window currently open for a service
    pub fn find_by_service(&self, service_id: &str) -> Option<&Window> {
        self.by_service.get(service_id).and_then(|&id| self.get(id))
    }

    /// Sub-windows owned by `id`
    pub fn children_of(&self, id: WindowId) -> &[WindowId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Focus a window (brings to top)
    pub fn focus(&mut self, id: WindowId) {
        if self.get(id).is_none() {
            return;
        }
        let z_index = self.take_z();
        if let Some(window) = self.get_mut(id) {
            window.z_index = z_index;
        }
    }

    /// Un-minimize a window and bring it to the front in one step
    pub fn restore(&mut self, id: WindowId) {
        if self.get(id).is_none() {
            return;
        }
        let z_index = self.take_z();
        if let Some(window) = self.get_mut(id) {
            window.minimized = false;
            window.z_index = z_index;
        }
    }

    /// Get the currently focused window ID
    ///
    /// This is the visible window with the highest z-index.
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Toggle the minimized flag without touching z-order
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(window) = self.get_mut(id) {
            window.minimized = !window.minimized;
        }
    }

    /// Maximize a window, or restore it if already maximized
    pub fn maximize(&mut self, id: WindowId) {
        let viewport = &self.viewport;
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };

        if window.maximized {
            window.maximized = false;
            window.size = viewport.fit_size(window.original_size);
            window.position = viewport.clamp_position(window.original_position, window.size);
        } else {
            window.original_position = window.position;
            window.original_size = window.size;
            window.maximized = true;
            window.position = Vec2::ZERO;
            window.size = viewport.desktop_size();
        }
    }

    /// Move a window, keeping it on the desktop
    ///
    /// Maximized windows don't move; on mobile every window is pinned to
    /// the origin.
    pub fn move_window(&mut self, id: WindowId, position: Vec2) {
        let viewport = &self.viewport;
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        if window.maximized {
            return;
        }
        window.position = if viewport.is_mobile() {
            Vec2::ZERO
        } else {
            viewport.clamp_position(position, window.size)
        };
    }

    /// Resize a window to `size` with its top-left corner at `position`
    ///
    /// When `position` differs from the current position on an axis, that
    /// axis is being resized from its leading edge and the trailing edge
    /// (`position + size`) stays put. Otherwise the leading edge stays put.
    /// Growth stops at the desktop boundary on the dragged side, then the
    /// window's minimum applies. On mobile the window stays at the origin.
    pub fn resize(&mut self, id: WindowId, size: Size, position: Vec2) {
        let viewport = &self.viewport;
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        if window.maximized {
            return;
        }

        let area = viewport.desktop_size();
        let (x, width) = resize_axis(
            position.x != window.position.x,
            position.x,
            size.width,
            window.min_size.width,
            area.width,
        );
        let (y, height) = resize_axis(
            position.y != window.position.y,
            position.y,
            size.height,
            window.min_size.height,
            area.height,
        );

        let new_size = Size::new(width, height);
        window.size = new_size;
        window.position = if viewport.is_mobile() {
            Vec2::ZERO
        } else {
            viewport.clamp_position(Vec2::new(x, y), new_size)
        };
    }

    /// Apply a new screen size to every window
    ///
    /// Maximized windows refill the desktop; the rest are shrunk only if
    /// they no longer fit and then clamped back on screen.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport.set_screen_size(width, height);
        let viewport = &self.viewport;
        for window in &mut self.windows {
            if window.maximized {
                window.position = Vec2::ZERO;
                window.size = viewport.desktop_size();
            } else {
                window.size = viewport.fit_size(window.size);
                window.position = viewport.clamp_position(window.position, window.size);
            }
        }
        debug!(width, height, windows = self.windows.len(), "viewport resized");
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get all windows in open order
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Find the topmost visible window at a desktop position
    pub fn window_at(&self, pos: Vec2) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized && w.rect().contains(pos))
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Find which region of which window is at a desktop position
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let id = self.window_at(pos)?;
        let window = self.get(id)?;
        Some((id, self.hit_test_window(window, pos)))
    }

    /// Hit test a specific window at a position
    fn hit_test_window(&self, window: &Window, pos: Vec2) -> WindowRegion {
        // Edges first so the title bar never steals a resize grab
        if !window.maximized {
            if let Some(handle) =
                WindowRegion::resize_handle_at(&window.rect(), pos, self.config.resize_handle)
            {
                return handle;
            }
        }

        if let Some(region) = hit_test_buttons(window, pos, &self.config) {
            return region;
        }

        if window.title_bar_rect(&self.config).contains(pos) {
            return WindowRegion::TitleBar;
        }

        WindowRegion::Content
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}

/// Resolve one axis of a resize to `(start, length)`
///
/// A leading-edge resize keeps `start + length` fixed and may grow back to
/// 0; a trailing-edge resize keeps `start` fixed and may grow to `extent`.
fn resize_axis(leading: bool, start: f32, length: f32, min: f32, extent: f32) -> (f32, f32) {
    if leading {
        let end = start + length;
        let length = length.min(end).max(min).min(extent);
        (end - length, length)
    } else {
        let start = start.max(0.0);
        let length = length.min(extent - start).max(min).min(extent);
        (start, length)
    }
}

/// Hit test window buttons (close, maximize, minimize)
fn hit_test_buttons(window: &Window, pos: Vec2, frame: &DesktopConfig) -> Option<WindowRegion> {
    if window.close_button_rect(frame).contains(pos) {
        return Some(WindowRegion::CloseButton);
    }
    if window.maximize_button_rect(frame).contains(pos) {
        return Some(WindowRegion::MaximizeButton);
    }
    if window.minimize_button_rect(frame).contains(pos) {
        return Some(WindowRegion::MinimizeButton);
    }
    None
}
