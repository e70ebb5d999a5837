//! Desktop layout configuration

use serde::Deserialize;
use crate::error::{DesktopError, Result};
use crate::math::{Size, Vec2};

/// Tunable layout constants for the desktop shell
///
/// Every field has a default, so a JSON document only needs to name the
/// values it overrides.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Height of the app-bar strip reserved at the bottom of the screen
    pub bar_height: f32,
    /// Viewports at or below this width use the mobile layout
    pub mobile_breakpoint: f32,
    /// Position of the first cascaded window on both axes
    pub cascade_origin: f32,
    /// Offset added per already-open window
    pub cascade_step: f32,
    /// First z-index handed out
    pub initial_z_index: u32,
    /// Edge length of an icon's square hit box
    pub icon_size: f32,
    /// Position of the first icon on both axes
    pub icon_origin: f32,
    /// Distance between icon grid cells
    pub icon_spacing: f32,
    /// Icons per grid row
    pub icon_columns: usize,
    /// Width of the resize band along each window edge
    pub resize_handle: f32,
    /// Height of the title-bar strip
    pub title_bar_height: f32,
    /// Edge length of the title-bar buttons
    pub button_size: f32,
    /// Gap between the buttons and the right window edge
    pub button_margin: f32,
    /// Horizontal gap between adjacent buttons
    pub button_spacing: f32,
    /// Offset of a sub-window from its parent's position
    pub sub_window_offset: f32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            bar_height: 40.0,
            mobile_breakpoint: 768.0,
            cascade_origin: 100.0,
            cascade_step: 30.0,
            initial_z_index: 100,
            icon_size: 100.0,
            icon_origin: 20.0,
            icon_spacing: 100.0,
            icon_columns: 3,
            resize_handle: 8.0,
            title_bar_height: 24.0,
            button_size: 16.0,
            button_margin: 4.0,
            button_spacing: 2.0,
            sub_window_offset: 50.0,
        }
    }
}

impl DesktopConfig {
    /// Parse a configuration from JSON, filling unspecified fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make clamping or layout meaningless
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("barHeight", self.bar_height),
            ("mobileBreakpoint", self.mobile_breakpoint),
            ("cascadeOrigin", self.cascade_origin),
            ("cascadeStep", self.cascade_step),
            ("iconOrigin", self.icon_origin),
            ("resizeHandle", self.resize_handle),
            ("subWindowOffset", self.sub_window_offset),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(DesktopError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let positive = [
            ("iconSize", self.icon_size),
            ("iconSpacing", self.icon_spacing),
            ("titleBarHeight", self.title_bar_height),
            ("buttonSize", self.button_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(DesktopError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if self.icon_columns == 0 {
            return Err(DesktopError::InvalidConfig(
                "iconColumns must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Square hit box of a desktop icon
    #[inline]
    pub fn icon_box(&self) -> Size {
        Size::new(self.icon_size, self.icon_size)
    }

    /// Grid position of the icon at `index` in registry order
    pub fn icon_grid_position(&self, index: usize) -> Vec2 {
        let col = index % self.icon_columns;
        let row = index / self.icon_columns;
        Vec2::new(
            self.icon_origin + col as f32 * self.icon_spacing,
            self.icon_origin + row as f32 * self.icon_spacing,
        )
    }

    /// Cascaded position for a new window when `open_count` windows exist
    pub fn cascade_position(&self, open_count: usize) -> Vec2 {
        let offset = self.cascade_origin + open_count as f32 * self.cascade_step;
        Vec2::new(offset, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DesktopConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_overrides_only_named_fields() {
        let config = DesktopConfig::from_json(r#"{ "barHeight": 48, "iconColumns": 4 }"#).unwrap();
        assert!((config.bar_height - 48.0).abs() < 0.001);
        assert_eq!(config.icon_columns, 4);
        assert!((config.mobile_breakpoint - 768.0).abs() < 0.001);
        assert_eq!(config.initial_z_index, 100);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = DesktopConfig::from_json(r#"{ "barHeight": -1 }"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));

        let err = DesktopConfig::from_json(r#"{ "iconColumns": 0 }"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));

        let err = DesktopConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, DesktopError::Json(_)));
    }

    #[test]
    fn test_icon_grid_position() {
        let config = DesktopConfig::default();
        assert_eq!(config.icon_grid_position(0), Vec2::new(20.0, 20.0));
        assert_eq!(config.icon_grid_position(2), Vec2::new(220.0, 20.0));
        assert_eq!(config.icon_grid_position(3), Vec2::new(20.0, 120.0));
    }

    #[test]
    fn test_cascade_position() {
        let config = DesktopConfig::default();
        assert_eq!(config.cascade_position(0), Vec2::new(100.0, 100.0));
        assert_eq!(config.cascade_position(2), Vec2::new(160.0, 160.0));
    }
}
