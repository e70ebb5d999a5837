//! Icon layout - placement, dragging, and hit testing of desktop icons

use std::collections::BTreeMap;
use tracing::debug;
use crate::config::DesktopConfig;
use crate::math::{Rect, Size, Vec2};
use crate::service::ServiceRegistry;
use crate::viewport::Viewport;
use super::DesktopIcon;

/// The fixed set of desktop icons
///
/// Icons are created once from the registry and never destroyed; only
/// their positions change.
#[derive(Clone, Debug, Default)]
pub struct IconLayout {
    /// Icons in registry order
    icons: Vec<DesktopIcon>,
    /// Hit box of every icon
    icon_size: Size,
}

impl IconLayout {
    /// Lay out one icon per service on the default grid
    pub fn from_registry(registry: &ServiceRegistry, config: &DesktopConfig) -> Self {
        let icons = registry
            .iter()
            .enumerate()
            .map(|(index, service)| DesktopIcon::for_service(service, config.icon_grid_position(index)))
            .collect();
        Self {
            icons,
            icon_size: config.icon_box(),
        }
    }

    /// Hit box size shared by all icons
    #[inline]
    pub fn icon_size(&self) -> Size {
        self.icon_size
    }

    /// Get an icon by id
    pub fn get(&self, id: &str) -> Option<&DesktopIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// Icons in registry order
    pub fn iter(&self) -> impl Iterator<Item = &DesktopIcon> {
        self.icons.iter()
    }

    /// Number of icons
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether there are no icons
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icon ids paired with their hit boxes
    pub fn hit_boxes(&self) -> impl Iterator<Item = (&str, Rect)> {
        let size = self.icon_size;
        self.icons.iter().map(move |icon| (icon.id.as_str(), icon.rect(size)))
    }

    /// Topmost icon under a desktop position
    ///
    /// Later icons draw above earlier ones.
    pub fn icon_at(&self, pos: Vec2) -> Option<&DesktopIcon> {
        self.icons
            .iter()
            .rev()
            .find(|icon| icon.rect(self.icon_size).contains(pos))
    }

    /// Move an icon, keeping its hit box on the desktop
    pub fn move_icon(&mut self, id: &str, position: Vec2, viewport: &Viewport) {
        let size = self.icon_size;
        if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == id) {
            icon.position = viewport.clamp_position(position, size);
        }
    }

    /// Current positions keyed by icon id
    pub fn positions(&self) -> BTreeMap<String, Vec2> {
        self.icons
            .iter()
            .map(|icon| (icon.id.clone(), icon.position))
            .collect()
    }

    /// Apply saved positions, ignoring ids that have no icon
    pub fn apply_positions(&mut self, positions: &BTreeMap<String, Vec2>, viewport: &Viewport) {
        let mut applied = 0;
        for (id, position) in positions {
            if self.get(id).is_some() {
                self.move_icon(id, *position, viewport);
                applied += 1;
            }
        }
        debug!(applied, saved = positions.len(), "icon positions restored");
    }
}
