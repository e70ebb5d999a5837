//! Window management module
//!
//! Provides window lifecycle, z-order, clamping and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod region;
mod manager;

pub use window::Window;
pub use config::WindowConfig;
pub use region::WindowRegion;
pub use manager::WindowManager;

/// Unique window identifier, never reused within a manager
pub type WindowId = u64;
