//! Reducer actions and side-effect intents for the desktop
//!
//! Hosts translate their events into [`DesktopAction`]s and apply them
//! with [`reduce`]. The returned [`DesktopEffect`]s name work the host
//! still has to do, such as persisting the layout.

use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::desktop::Wallpaper;
use crate::engine::DesktopEngine;
use crate::input::{DragState, InputResult};
use crate::window::WindowId;

/// Actions accepted by [`reduce`]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DesktopAction {
    /// Open a registered service or bring its window forward
    Open { service_id: String },
    /// Open the mixer of a music maker window
    OpenMixer { parent: WindowId },
    /// Open a file from a folder window
    OpenFolderEntry { folder: WindowId, entry_id: String },
    /// Set music maker levels
    SetMixerLevels { window_id: WindowId, drums: f32, synth: f32 },
    Close { window_id: WindowId },
    Focus { window_id: WindowId },
    Minimize { window_id: WindowId },
    ToggleMaximize { window_id: WindowId },
    Restore { window_id: WindowId },
    Move { window_id: WindowId, x: f32, y: f32 },
    Resize { window_id: WindowId, width: f32, height: f32, x: f32, y: f32 },
    /// The browser window changed size
    ViewportResized { width: f32, height: f32 },
    PointerDown { x: f32, y: f32, button: u8 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    /// Click on a window's app-bar button
    TaskbarClick { window_id: WindowId },
    ToggleStartMenu,
    SetWallpaper { wallpaper: Wallpaper },
    SetDesktopColor { color: String },
}

/// Side effects requested by [`reduce`]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DesktopEffect {
    /// A window for a service is now showing
    WindowOpened { window_id: WindowId, service_id: String },
    /// Windows were removed, sub-windows included
    WindowsClosed { window_ids: Vec<WindowId> },
    /// Persist the snapshot (icon positions and theme)
    PersistLayout,
    /// Deliver a pointer press to window content
    ForwardToContent { window_id: WindowId, local_x: f32, local_y: f32 },
}

/// Apply one action to the engine
pub fn reduce(engine: &mut DesktopEngine, action: DesktopAction) -> Vec<DesktopEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Open { service_id } => {
            if let Some(window_id) = engine.open(&service_id) {
                effects.push(DesktopEffect::WindowOpened { window_id, service_id });
            }
        }
        DesktopAction::OpenMixer { parent } => {
            if let Some(window_id) = engine.open_mixer(parent) {
                push_opened(engine, window_id, &mut effects);
            }
        }
        DesktopAction::OpenFolderEntry { folder, entry_id } => {
            if let Some(window_id) = engine.open_folder_entry(folder, &entry_id) {
                push_opened(engine, window_id, &mut effects);
            }
        }
        DesktopAction::SetMixerLevels { window_id, drums, synth } => {
            engine.set_mixer_levels(window_id, drums, synth);
        }
        DesktopAction::Close { window_id } => {
            let window_ids = engine.close_window(window_id);
            if !window_ids.is_empty() {
                effects.push(DesktopEffect::WindowsClosed { window_ids });
            }
        }
        DesktopAction::Focus { window_id } => engine.focus_window(window_id),
        DesktopAction::Minimize { window_id } => engine.minimize_window(window_id),
        DesktopAction::ToggleMaximize { window_id } => engine.maximize_window(window_id),
        DesktopAction::Restore { window_id } => engine.restore_window(window_id),
        DesktopAction::Move { window_id, x, y } => engine.move_window(window_id, x, y),
        DesktopAction::Resize { window_id, width, height, x, y } => {
            engine.resize_window(window_id, width, height, x, y);
        }
        DesktopAction::ViewportResized { width, height } => engine.on_viewport_resize(width, height),
        DesktopAction::PointerDown { x, y, button } => {
            let result = engine.handle_pointer_down(x, y, button);
            push_input_effects(engine, result, &mut effects);
        }
        DesktopAction::PointerMove { x, y } => {
            engine.handle_pointer_move(x, y);
        }
        DesktopAction::PointerUp => {
            let icon_dragged = matches!(
                engine.input.drag_state(),
                Some(DragState::MoveIcon { moved: true, .. })
            );
            let result = engine.handle_pointer_up();
            push_input_effects(engine, result, &mut effects);
            if icon_dragged {
                effects.push(DesktopEffect::PersistLayout);
            }
        }
        DesktopAction::TaskbarClick { window_id } => engine.taskbar_click(window_id),
        DesktopAction::ToggleStartMenu => engine.toggle_start_menu(),
        DesktopAction::SetWallpaper { wallpaper } => {
            engine.set_wallpaper(wallpaper);
            effects.push(DesktopEffect::PersistLayout);
        }
        DesktopAction::SetDesktopColor { color } => match engine.set_desktop_color(&color) {
            Ok(()) => effects.push(DesktopEffect::PersistLayout),
            Err(err) => warn!(%err, "desktop colour rejected"),
        },
    }
    effects
}

fn push_opened(engine: &DesktopEngine, window_id: WindowId, effects: &mut Vec<DesktopEffect>) {
    if let Some(window) = engine.windows.get(window_id) {
        effects.push(DesktopEffect::WindowOpened {
            window_id,
            service_id: window.service_id.clone(),
        });
    }
}

fn push_input_effects(engine: &DesktopEngine, result: InputResult, effects: &mut Vec<DesktopEffect>) {
    match result {
        InputResult::Opened { window_id } => push_opened(engine, window_id, effects),
        InputResult::Closed { window_ids } => {
            effects.push(DesktopEffect::WindowsClosed { window_ids });
        }
        InputResult::Forward { window_id, local_x, local_y } => {
            effects.push(DesktopEffect::ForwardToContent { window_id, local_x, local_y });
        }
        InputResult::Handled | InputResult::Unhandled => {}
    }
}
