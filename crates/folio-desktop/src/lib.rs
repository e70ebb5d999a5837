//! Window manager for a simulated desktop shell
//!
//! This crate provides the state behind a portfolio site dressed up as a
//! desktop operating system:
//! - Window management (open, close, focus, z-order, minimize, maximize)
//! - Viewport clamping and the mobile single-column layout
//! - Desktop icons with drag-vs-click detection
//! - Marquee multi-selection, taskbar entries, and the start menu
//! - Wallpaper settings and snapshot persistence
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`service`]: The service registry and window content payloads
//! - [`window`]: Window records and the window manager
//! - [`desktop`]: Icons and theme
//! - [`input`]: Drag state machine and marquee selection
//! - [`persistence`]: Snapshots and key-value stores
//! - [`reducer`]: Action/effect interface for hosts
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::DesktopEngine;
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! let id = engine.open("browser").unwrap();
//! let window = engine.windows.get(id).unwrap();
//! assert_eq!(window.z_index, 100);
//! ```
//!
//! Operations on unknown window ids are ignored and geometry is always
//! clamped, so only configuration, registry construction, and snapshot
//! decoding return errors.

pub mod math;
pub mod service;
pub mod window;
pub mod desktop;
pub mod input;
pub mod persistence;
pub mod reducer;

mod config;
mod engine;
mod error;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use service::{FolderEntry, IconGlyph, MixerLevels, ServiceDescriptor, ServiceRegistry, WindowContent};
pub use window::{Window, WindowConfig, WindowId, WindowManager, WindowRegion};
pub use desktop::{DesktopIcon, IconLayout, Theme, Wallpaper};
pub use input::{DragState, InputResult, InputRouter, Selection};
pub use persistence::{KeyValueStore, MemoryStore, Snapshot};
pub use reducer::{reduce, DesktopAction, DesktopEffect};

pub use config::DesktopConfig;
pub use engine::{DesktopEngine, TaskbarEntry, TaskbarState};
pub use error::{DesktopError, Result};
pub use viewport::Viewport;
