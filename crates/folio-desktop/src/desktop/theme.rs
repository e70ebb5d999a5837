//! Wallpaper and background colour settings

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, Result};

/// Background colour used before the user picks one
pub const DEFAULT_DESKTOP_COLOR: &str = "#008080";

/// Background pattern behind the icons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wallpaper {
    /// Flat fill with the custom colour
    Custom,
    Rivets,
    #[default]
    Zigzag,
    PurpleSquares,
    Honey,
    Water,
    Noise,
}

impl Wallpaper {
    /// Every wallpaper in menu order
    pub const ALL: [Wallpaper; 7] = [
        Wallpaper::Custom,
        Wallpaper::Rivets,
        Wallpaper::Zigzag,
        Wallpaper::PurpleSquares,
        Wallpaper::Honey,
        Wallpaper::Water,
        Wallpaper::Noise,
    ];

    /// Stable identifier used by the host and persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            Wallpaper::Custom => "custom",
            Wallpaper::Rivets => "rivets",
            Wallpaper::Zigzag => "zigzag",
            Wallpaper::PurpleSquares => "purple-squares",
            Wallpaper::Honey => "honey",
            Wallpaper::Water => "water",
            Wallpaper::Noise => "noise",
        }
    }

    /// Parse an identifier, `None` if unknown
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|wallpaper| wallpaper.as_str() == name)
    }
}

/// Desktop appearance chosen in Display Properties
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Selected pattern
    pub wallpaper: Wallpaper,
    /// `#rrggbb` colour for the custom wallpaper
    pub desktop_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            wallpaper: Wallpaper::default(),
            desktop_color: DEFAULT_DESKTOP_COLOR.to_string(),
        }
    }
}

impl Theme {
    /// Set the custom colour, normalized to lowercase
    pub fn set_desktop_color(&mut self, color: &str) -> Result<()> {
        let hex = color
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| DesktopError::InvalidColor(color.to_string()))?;
        self.desktop_color = format!("#{}", hex.to_ascii_lowercase());
        Ok(())
    }
}
