//! Desktop surface module
//!
//! Provides the icon grid and the desktop's wallpaper settings.

mod icon;
mod layout;
mod theme;

pub use icon::DesktopIcon;
pub use layout::IconLayout;
pub use theme::{Theme, Wallpaper, DEFAULT_DESKTOP_COLOR};
