//! Window lifecycle and operations

use tracing::{debug, warn};
use crate::math::{Size, Vec2};
use crate::service::{MixerLevels, ServiceDescriptor, WindowContent};
use crate::window::{WindowConfig, WindowId};
use super::DesktopEngine;

/// Service id shared by every mixer sub-window
pub const MIXER_SERVICE_ID: &str = "mixer";

impl DesktopEngine {
    /// Open a registered service, reusing its window if already open
    ///
    /// Returns `None` for ids the registry doesn't know.
    pub fn open(&mut self, service_id: &str) -> Option<WindowId> {
        let Some(service) = self.registry.get(service_id) else {
            debug!(service_id, "open ignored for unknown service");
            return None;
        };
        Some(self.windows.open(service))
    }

    /// Open an ad-hoc service that is not in the registry
    pub fn open_descriptor(&mut self, service: &ServiceDescriptor) -> WindowId {
        self.windows.open(service)
    }

    /// Close a window and its sub-windows
    ///
    /// Gestures and selections referring to removed windows are dropped.
    pub fn close_window(&mut self, id: WindowId) -> Vec<WindowId> {
        let removed = self.windows.close(id);
        for &window_id in &removed {
            if self.input.cancel_for_window(window_id) {
                debug!(window_id, "gesture aborted by close");
            }
            self.selection.remove_window(window_id);
        }
        removed
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.focus(id);
    }

    /// Toggle minimized
    pub fn minimize_window(&mut self, id: WindowId) {
        self.windows.minimize(id);
    }

    /// Toggle maximized
    pub fn maximize_window(&mut self, id: WindowId) {
        self.windows.maximize(id);
    }

    /// Un-minimize and focus
    pub fn restore_window(&mut self, id: WindowId) {
        self.windows.restore(id);
    }

    /// Move a window
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        self.windows.move_window(id, Vec2::new(x, y));
    }

    /// Resize a window with its top-left corner at (x, y)
    pub fn resize_window(&mut self, id: WindowId, width: f32, height: f32, x: f32, y: f32) {
        self.windows.resize(id, Size::new(width, height), Vec2::new(x, y));
    }

    /// Open or focus the mixer owned by a music maker window
    pub fn open_mixer(&mut self, parent: WindowId) -> Option<WindowId> {
        let Some(owner) = self.windows.get(parent) else {
            warn!(parent, "mixer requested for a missing window");
            return None;
        };
        let levels = match &owner.content {
            WindowContent::MusicMaker { levels } => *levels,
            other => {
                warn!(parent, kind = other.kind(), "mixer requested for a window without one");
                return None;
            }
        };
        let position = owner.position.offset(self.config().sub_window_offset);

        let existing = self.windows.children_of(parent).iter().copied().find(|&child| {
            self.windows
                .get(child)
                .is_some_and(|w| matches!(w.content, WindowContent::Mixer { .. }))
        });
        if let Some(mixer) = existing {
            self.windows.restore(mixer);
            return Some(mixer);
        }

        let content = WindowContent::Mixer { levels };
        let id = self.windows.create(WindowConfig {
            service_id: MIXER_SERVICE_ID.to_string(),
            title: "Mixer".to_string(),
            size: content.default_size(),
            content,
            position: Some(position),
            min_size: None,
            parent: Some(parent),
        });
        Some(id)
    }

    /// Set drum and synth levels on a music maker and its mixers
    ///
    /// `window` may be either the music maker or one of its mixers.
    /// Returns false when the window has no levels to set.
    pub fn set_mixer_levels(&mut self, window: WindowId, drums: f32, synth: f32) -> bool {
        let Some(target) = self.windows.get(window) else {
            return false;
        };
        let owner = match (&target.content, target.parent) {
            (WindowContent::MusicMaker { .. }, _) => window,
            (WindowContent::Mixer { .. }, Some(parent)) => parent,
            _ => return false,
        };

        let levels = MixerLevels::new(drums, synth);
        let mut targets = vec![owner];
        targets.extend(self.windows.children_of(owner).iter().copied());
        for id in targets {
            if let Some(w) = self.windows.get_mut(id) {
                w.content.set_mixer_levels(levels);
            }
        }
        true
    }

    /// Open a file listed in a folder window
    ///
    /// PDFs open as their own single-instance window; other entries have
    /// nothing to open.
    pub fn open_folder_entry(&mut self, folder: WindowId, entry_id: &str) -> Option<WindowId> {
        let service = {
            let window = self.windows.get(folder)?;
            let WindowContent::Folder { files } = &window.content else {
                return None;
            };
            let entry = files.iter().find(|entry| entry.id == entry_id)?;
            let path = entry.pdf_path.as_deref()?;
            ServiceDescriptor::for_pdf_entry(entry, path)
        };
        Some(self.open_descriptor(&service))
    }
}
