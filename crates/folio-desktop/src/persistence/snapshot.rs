//! Snapshot serialization for desktop state

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::desktop::{Theme, Wallpaper, DEFAULT_DESKTOP_COLOR};
use crate::error::{DesktopError, Result};
use crate::math::Vec2;

/// Store key the snapshot lives under
pub const SNAPSHOT_KEY: &str = "folio-desktop";

/// Snapshot of desktop state for persistence
///
/// Open windows are deliberately absent: every visit starts with an empty
/// desktop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    /// Icon positions keyed by icon id
    #[serde(default)]
    pub icon_positions: BTreeMap<String, Vec2>,
    /// Selected wallpaper
    #[serde(default)]
    pub wallpaper: Wallpaper,
    /// Custom wallpaper colour
    #[serde(default = "default_color")]
    pub desktop_color: String,
}

fn default_color() -> String {
    DEFAULT_DESKTOP_COLOR.to_string()
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(icon_positions: BTreeMap<String, Vec2>, theme: &Theme) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            icon_positions,
            wallpaper: theme.wallpaper,
            desktop_color: theme.desktop_color.clone(),
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Version 0 had no theme fields; serde defaults already filled them.
        self.version = Self::CURRENT_VERSION;
    }

    /// Theme stored in this snapshot
    ///
    /// A colour that isn't `#rrggbb` falls back to the default.
    pub fn theme(&self) -> Theme {
        let mut theme = Theme {
            wallpaper: self.wallpaper,
            ..Theme::default()
        };
        if let Err(err) = theme.set_desktop_color(&self.desktop_color) {
            warn!(%err, "saved desktop colour ignored");
        }
        theme
    }

    /// Encode as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON, migrating older versions
    pub fn from_json(json: &str) -> Result<Self> {
        let mut snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.version > Self::CURRENT_VERSION {
            return Err(DesktopError::UnsupportedSnapshotVersion {
                found: snapshot.version,
                supported: Self::CURRENT_VERSION,
            });
        }
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        Ok(snapshot)
    }
}
