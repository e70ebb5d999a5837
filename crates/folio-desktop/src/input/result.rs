//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Input should be forwarded to window content
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in window-local space
        local_x: f32,
        /// Y coordinate in window-local space
        local_y: f32,
    },
    /// An icon click opened (or re-focused) a service window
    Opened {
        /// Window showing the service
        window_id: WindowId,
    },
    /// Windows were closed by the gesture
    Closed {
        /// Every removed window, sub-windows included
        window_ids: Vec<WindowId>,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handled_variants() {
        assert!(InputResult::Handled.is_handled());
        assert!(InputResult::Opened { window_id: 1 }.is_handled());
        assert!(!InputResult::Unhandled.is_handled());

        let forward = InputResult::Forward { window_id: 1, local_x: 4.0, local_y: 8.0 };
        assert!(forward.is_handled());
        assert!(forward.is_forward());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_value(InputResult::Opened { window_id: 7 }).unwrap();
        assert_eq!(json["type"], "opened");
        assert_eq!(json["window_id"], 7);
    }
}
