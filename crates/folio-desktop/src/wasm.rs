//! WASM exports for the desktop shell
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the page's UI layer to drive the desktop directly.

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::desktop::Wallpaper;
use crate::engine::DesktopEngine;
use crate::persistence::KeyValueStore;
use crate::reducer::{reduce, DesktopAction};

/// Wrap a message in a JS `Error` so it throws with a stack
fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Browser `localStorage` as a [`KeyValueStore`]
///
/// Storage failures (quota, private mode) are logged and otherwise ignored.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the window's local storage, `None` outside a browser window
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            warn!(key, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if self.storage.remove_item(key).is_err() {
            warn!(key, "localStorage remove failed");
        }
    }
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            engine: DesktopEngine::new(),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the desktop with screen dimensions and restore saved state
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
        if let Some(store) = LocalStorage::open() {
            if let Err(err) = self.engine.restore_from(&store) {
                warn!(%err, "saved desktop state ignored");
            }
        }
    }

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.on_viewport_resize(width, height);
    }

    /// Persist icon positions and theme
    #[wasm_bindgen]
    pub fn save(&self) -> Result<(), JsValue> {
        let store = LocalStorage::open().ok_or_else(|| js_error("localStorage unavailable"))?;
        self.engine
            .save_to(&store)
            .map_err(js_error)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Apply a JSON-encoded action, returning the effects as JSON
    #[wasm_bindgen]
    pub fn dispatch(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: DesktopAction =
            serde_json::from_str(action_json).map_err(js_error)?;
        let effects = reduce(&mut self.engine, action);
        serde_json::to_string(&effects).map_err(js_error)
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a service window
    #[wasm_bindgen]
    pub fn open(&mut self, service_id: &str) -> Option<u64> {
        self.engine.open(service_id)
    }

    /// Close a window and its sub-windows
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) {
        self.engine.close_window(id);
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) {
        self.engine.focus_window(id);
    }

    /// Toggle minimized
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: u64) {
        self.engine.minimize_window(id);
    }

    /// Toggle maximized
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: u64) {
        self.engine.maximize_window(id);
    }

    /// Get the focused window
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<u64> {
        self.engine.windows.focused()
    }

    /// Get all windows as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let focused_id = self.engine.windows.focused();
        let windows: Vec<serde_json::Value> = self
            .engine
            .windows
            .all_windows()
            .map(|w| {
                serde_json::json!({
                    "id": w.id,
                    "serviceId": w.service_id,
                    "title": w.title,
                    "content": w.content,
                    "position": { "x": w.position.x, "y": w.position.y },
                    "size": { "width": w.size.width, "height": w.size.height },
                    "zIndex": w.z_index,
                    "minimized": w.minimized,
                    "maximized": w.maximized,
                    "parent": w.parent,
                    "selected": self.engine.selection.contains_window(w.id),
                    "focused": focused_id == Some(w.id)
                })
            })
            .collect();
        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get visible window ids back to front as JSON
    #[wasm_bindgen]
    pub fn get_render_order_json(&self) -> String {
        let ids: Vec<u64> = self
            .engine
            .windows
            .windows_by_z()
            .into_iter()
            .filter(|w| !w.minimized)
            .map(|w| w.id)
            .collect();
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get desktop icons as JSON
    #[wasm_bindgen]
    pub fn get_icons_json(&self) -> String {
        let size = self.engine.icons.icon_size();
        let icons: Vec<serde_json::Value> = self
            .engine
            .icons
            .iter()
            .map(|icon| {
                serde_json::json!({
                    "id": icon.id,
                    "label": icon.label,
                    "glyph": icon.glyph,
                    "position": { "x": icon.position.x, "y": icon.position.y },
                    "size": { "width": size.width, "height": size.height },
                    "selected": self.engine.selection.contains_icon(&icon.id)
                })
            })
            .collect();
        serde_json::to_string(&icons).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the marquee rectangle as JSON (`null` when idle)
    #[wasm_bindgen]
    pub fn get_selection_rect_json(&self) -> String {
        serde_json::to_string(&self.engine.selection.rect).unwrap_or_else(|_| "null".to_string())
    }

    /// Get app-bar entries as JSON
    #[wasm_bindgen]
    pub fn get_taskbar_json(&self) -> String {
        serde_json::to_string(&self.engine.taskbar()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Click a window's app-bar button
    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: u64) {
        self.engine.taskbar_click(id);
    }

    /// Toggle the start menu
    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        self.engine.toggle_start_menu();
    }

    /// Whether the start menu is open
    #[wasm_bindgen]
    pub fn is_start_menu_open(&self) -> bool {
        self.engine.is_start_menu_open()
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// Get wallpaper and colour as JSON
    #[wasm_bindgen]
    pub fn get_theme_json(&self) -> String {
        serde_json::to_string(&self.engine.theme).unwrap_or_else(|_| "{}".to_string())
    }

    /// Select a wallpaper by name; unknown names are ignored
    #[wasm_bindgen]
    pub fn set_wallpaper(&mut self, name: &str) {
        match Wallpaper::from_name(name) {
            Some(wallpaper) => self.engine.set_wallpaper(wallpaper),
            None => warn!(name, "unknown wallpaper"),
        }
    }

    /// Set the custom wallpaper colour
    #[wasm_bindgen]
    pub fn set_desktop_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.engine
            .set_desktop_color(color)
            .map_err(js_error)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> String {
        let result = self.engine.handle_pointer_down(x, y, button);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.handle_pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// CSS cursor for a hover position
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.engine.cursor_at(x, y).to_string()
    }

    /// Start a window resize operation
    #[wasm_bindgen]
    pub fn start_window_resize(&mut self, window_id: u64, direction: &str, x: f32, y: f32) {
        self.engine.start_resize_drag(window_id, direction, x, y);
    }

    /// Start a window drag operation
    #[wasm_bindgen]
    pub fn start_window_drag(&mut self, window_id: u64, x: f32, y: f32) {
        self.engine.start_move_drag(window_id, x, y);
    }
}
