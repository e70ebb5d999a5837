//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, sub-windows, and folder entries
//! - `input`: Pointer event handling and drag operations
//! - `taskbar`: App-bar entries and the start menu
//! - `persist`: Snapshot save and restore

mod windows;
mod input;
mod taskbar;
mod persist;

use tracing::debug;
use crate::config::DesktopConfig;
use crate::desktop::{IconLayout, Theme, Wallpaper};
use crate::error::Result;
use crate::input::{InputRouter, Selection};
use crate::service::ServiceRegistry;
use crate::viewport::Viewport;
use crate::window::WindowManager;

pub use taskbar::{TaskbarEntry, TaskbarState};

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (window lifecycle, focus, z-order)
/// - Desktop icons and marquee selection
/// - Input router (drag/resize state machine)
/// - Theme and start-menu state
pub struct DesktopEngine {
    /// Services the icons and windows are built from
    pub(crate) registry: ServiceRegistry,
    /// Window manager
    pub windows: WindowManager,
    /// Desktop icons
    pub icons: IconLayout,
    /// Current marquee selection
    pub selection: Selection,
    /// Input router
    pub input: InputRouter,
    /// Wallpaper settings
    pub theme: Theme,
    /// Whether the start menu is showing
    pub(crate) start_menu_open: bool,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a desktop with the portfolio services and default layout
    pub fn new() -> Self {
        Self::with_registry(DesktopConfig::default(), ServiceRegistry::portfolio())
    }

    /// Create a desktop from explicit configuration and services
    pub fn with_registry(config: DesktopConfig, registry: ServiceRegistry) -> Self {
        let icons = IconLayout::from_registry(&registry, &config);
        Self {
            registry,
            windows: WindowManager::new(config),
            icons,
            selection: Selection::default(),
            input: InputRouter::new(),
            theme: Theme::default(),
            start_menu_open: false,
        }
    }

    /// Create a desktop from a JSON configuration document
    pub fn from_config_json(json: &str) -> Result<Self> {
        let config = DesktopConfig::from_json(json)?;
        Ok(Self::with_registry(config, ServiceRegistry::portfolio()))
    }

    /// Initialize the desktop with screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.on_viewport_resize(width, height);
    }

    /// Apply a new screen size, re-clamping every window
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        self.windows.set_viewport_size(width, height);
    }

    /// Current viewport
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        self.windows.viewport()
    }

    /// Layout constants
    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        self.windows.config()
    }

    /// Registered services
    #[inline]
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Select a wallpaper pattern
    pub fn set_wallpaper(&mut self, wallpaper: Wallpaper) {
        debug!(wallpaper = wallpaper.as_str(), "wallpaper changed");
        self.theme.wallpaper = wallpaper;
    }

    /// Set the custom wallpaper colour
    pub fn set_desktop_color(&mut self, color: &str) -> Result<()> {
        self.theme.set_desktop_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_engine_init() {
        let mut engine = DesktopEngine::new();
        engine.init(1920.0, 1080.0);

        assert!((engine.viewport().screen_size.width - 1920.0).abs() < 0.001);
        assert_eq!(engine.icons.len(), engine.registry().len());
        assert_eq!(engine.windows.count(), 0);
    }

    #[test]
    fn test_from_config_json() {
        let engine = DesktopEngine::from_config_json(r#"{"barHeight": 30}"#).unwrap();
        assert!((engine.viewport().desktop_size().height - 1050.0).abs() < 0.001);

        assert!(DesktopEngine::from_config_json(r#"{"barHeight": -1}"#).is_err());
    }

    #[test]
    fn test_theme_setters() {
        let mut engine = DesktopEngine::new();
        engine.set_wallpaper(Wallpaper::Honey);
        engine.set_desktop_color("#AABBCC").unwrap();

        assert_eq!(engine.theme.wallpaper, Wallpaper::Honey);
        assert_eq!(engine.theme.desktop_color, "#aabbcc");
        assert!(engine.set_desktop_color("teal").is_err());
    }
}
