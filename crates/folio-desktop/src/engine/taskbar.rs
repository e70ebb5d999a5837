//! App-bar entries and start menu

use serde::Serialize;
use crate::window::WindowId;
use super::DesktopEngine;

/// How a window's app-bar button is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskbarState {
    /// Frontmost visible window
    Focused,
    /// Hidden, restorable from the app-bar
    Minimized,
    /// Visible but behind another window
    Inactive,
}

/// One app-bar button
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub service_id: String,
    pub title: String,
    pub state: TaskbarState,
}

impl DesktopEngine {
    /// App-bar buttons in open order
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        let focused = self.windows.focused();
        self.windows
            .all_windows()
            .map(|w| TaskbarEntry {
                window_id: w.id,
                service_id: w.service_id.clone(),
                title: w.title.clone(),
                state: if w.minimized {
                    TaskbarState::Minimized
                } else if Some(w.id) == focused {
                    TaskbarState::Focused
                } else {
                    TaskbarState::Inactive
                },
            })
            .collect()
    }

    /// Handle a click on a window's app-bar button
    ///
    /// A minimized window is restored and raised in one step.
    pub fn taskbar_click(&mut self, id: WindowId) {
        match self.windows.get(id).map(|w| w.minimized) {
            Some(true) => self.windows.restore(id),
            Some(false) => self.windows.focus(id),
            None => {}
        }
    }

    /// Open or close the start menu
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Close the start menu
    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Whether the start menu is showing
    #[inline]
    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }
}
