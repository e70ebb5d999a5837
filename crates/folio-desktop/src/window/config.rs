//! Window configuration for creation

use crate::math::{Size, Vec2};
use crate::service::{ServiceDescriptor, WindowContent, DEFAULT_MIN_SIZE};
use super::WindowId;

/// Configuration for creating a window
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Service the window belongs to
    pub service_id: String,
    /// Window title
    pub title: String,
    /// Payload handed to the renderer
    pub content: WindowContent,
    /// Initial position (None = cascade from the open window count)
    pub position: Option<Vec2>,
    /// Requested size before viewport clamping
    pub size: Size,
    /// Minimum size constraint
    pub min_size: Option<Size>,
    /// Owning window for sub-windows
    pub parent: Option<WindowId>,
}

impl WindowConfig {
    /// Configuration for a top-level window of `service`
    pub fn from_service(service: &ServiceDescriptor) -> Self {
        Self {
            service_id: service.id.clone(),
            title: service.title.clone(),
            content: service.content.clone(),
            position: None,
            size: service.default_size,
            min_size: Some(service.min_size),
            parent: None,
        }
    }

    /// Resolved minimum size
    #[inline]
    pub fn min_size(&self) -> Size {
        self.min_size.unwrap_or(DEFAULT_MIN_SIZE)
    }
}
