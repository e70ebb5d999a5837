//! Viewport geometry and clamping rules

use crate::config::DesktopConfig;
use crate::math::{Size, Vec2};

/// The visible screen and the desktop area left after reserving the app-bar
///
/// Every clamping computation in the window manager goes through here.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
    /// Height reserved for the app-bar at the bottom
    pub bar_height: f32,
    /// Widths at or below this use the mobile layout
    pub mobile_breakpoint: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a viewport with the default bar height and breakpoint
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, &DesktopConfig::default())
    }

    /// Create a viewport using the bar height and breakpoint from `config`
    pub fn with_config(width: f32, height: f32, config: &DesktopConfig) -> Self {
        Self {
            screen_size: Size::new(width, height),
            bar_height: config.bar_height,
            mobile_breakpoint: config.mobile_breakpoint,
        }
    }

    /// Update the screen size
    #[inline]
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }

    /// Size of the area windows may occupy
    #[inline]
    pub fn desktop_size(&self) -> Size {
        Size::new(
            self.screen_size.width.max(0.0),
            (self.screen_size.height - self.bar_height).max(0.0),
        )
    }

    /// Whether the small-screen layout applies
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.screen_size.width <= self.mobile_breakpoint
    }

    /// Clamp a top-left position so a box of `size` stays on the desktop
    ///
    /// Boxes larger than the desktop pin to the origin on that axis.
    pub fn clamp_position(&self, position: Vec2, size: Size) -> Vec2 {
        let area = self.desktop_size();
        Vec2::new(
            position.x.min(area.width - size.width).max(0.0),
            position.y.min(area.height - size.height).max(0.0),
        )
    }

    /// Shrink a size so it fits inside the desktop area
    #[inline]
    pub fn fit_size(&self, size: Size) -> Size {
        size.at_most(self.desktop_size())
    }
}
