//! Desktop icon - a launcher for one service

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};
use crate::service::{IconGlyph, ServiceDescriptor};

/// A movable launcher on the desktop background
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopIcon {
    /// Same as the service id it opens
    pub id: String,
    /// Caption under the glyph
    pub label: String,
    /// Image or emoji
    pub glyph: IconGlyph,
    /// Top-left corner in desktop coordinates
    pub position: Vec2,
}

impl DesktopIcon {
    /// Create the launcher for a service
    pub fn for_service(service: &ServiceDescriptor, position: Vec2) -> Self {
        Self {
            id: service.id.clone(),
            label: service.title.clone(),
            glyph: service.icon.clone(),
            position,
        }
    }

    /// Hit box for a given icon size
    #[inline]
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_pos_size(self.position, size)
    }
}
