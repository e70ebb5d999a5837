//! Snapshot save and restore

use tracing::debug;
use crate::error::Result;
use crate::persistence::{KeyValueStore, Snapshot, SNAPSHOT_KEY};
use super::DesktopEngine;

impl DesktopEngine {
    /// Capture icon positions and theme
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.icons.positions(), &self.theme)
    }

    /// Apply a snapshot; unknown icon ids are skipped
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.icons
            .apply_positions(&snapshot.icon_positions, self.windows.viewport());
        self.theme = snapshot.theme();
    }

    /// Write the current snapshot to a store
    pub fn save_to(&self, store: &dyn KeyValueStore) -> Result<()> {
        let json = self.snapshot().to_json()?;
        store.set(SNAPSHOT_KEY, &json);
        Ok(())
    }

    /// Load the snapshot from a store
    ///
    /// A missing key leaves the defaults in place. An undecodable snapshot
    /// is reported and nothing is applied.
    pub fn restore_from(&mut self, store: &dyn KeyValueStore) -> Result<()> {
        let Some(json) = store.get(SNAPSHOT_KEY) else {
            debug!("no saved desktop state");
            return Ok(());
        };
        let snapshot = Snapshot::from_json(&json)?;
        self.apply_snapshot(&snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::{Theme, Wallpaper};
    use crate::math::Vec2;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_save_and_restore() {
        let store = MemoryStore::new();
        let mut engine = DesktopEngine::new();
        engine.icons.move_icon("contact", Vec2::new(640.0, 480.0), engine.windows.viewport());
        engine.set_wallpaper(Wallpaper::Water);
        engine.save_to(&store).unwrap();

        let mut restored = DesktopEngine::new();
        restored.restore_from(&store).unwrap();

        assert_eq!(restored.icons.get("contact").unwrap().position, Vec2::new(640.0, 480.0));
        assert_eq!(restored.theme.wallpaper, Wallpaper::Water);
    }

    #[test]
    fn test_restore_without_saved_state_keeps_defaults() {
        let store = MemoryStore::new();
        let mut engine = DesktopEngine::new();
        engine.restore_from(&store).unwrap();

        assert_eq!(engine.icons.get("personal-documents").unwrap().position, Vec2::new(20.0, 20.0));
        assert_eq!(engine.theme, Theme::default());
    }

    #[test]
    fn test_restore_clamps_and_skips_unknown() {
        let store = MemoryStore::new();
        store.set(
            SNAPSHOT_KEY,
            r#"{"version":1,"iconPositions":{"browser":{"x":9000.0,"y":30.0},"gone":{"x":1.0,"y":1.0}}}"#,
        );
        let mut engine = DesktopEngine::new();
        engine.restore_from(&store).unwrap();

        assert_eq!(engine.icons.get("browser").unwrap().position, Vec2::new(1820.0, 30.0));
        assert!(engine.icons.get("gone").is_none());
    }

    #[test]
    fn test_restore_rejects_invalid_color() {
        let store = MemoryStore::new();
        store.set(
            SNAPSHOT_KEY,
            r#"{"version":1,"wallpaper":"custom","desktopColor":"url(javascript:x)"}"#,
        );
        let mut engine = DesktopEngine::new();
        engine.restore_from(&store).unwrap();

        assert_eq!(engine.theme.wallpaper, Wallpaper::Custom);
        assert_eq!(engine.theme.desktop_color, "#008080");
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let store = MemoryStore::new();
        store.set(SNAPSHOT_KEY, "not json");
        let mut engine = DesktopEngine::new();

        assert!(engine.restore_from(&store).is_err());
        assert_eq!(engine.icons.get("browser").unwrap().position, Vec2::new(120.0, 20.0));
    }
}
