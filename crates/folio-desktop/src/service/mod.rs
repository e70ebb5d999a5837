//! Service registry and window content descriptors
//!
//! A service is something a desktop icon can launch. The registry is the
//! fixed, ordered list of services the desktop starts with; the content tag
//! on each entry tells the host which viewer to render.

mod content;
mod registry;

pub use content::{FolderEntry, IconGlyph, MixerLevels, WindowContent};
pub use registry::{ServiceDescriptor, ServiceRegistry, DEFAULT_MIN_SIZE};
