//! Error types for the fallible edges of the desktop
//!
//! Window operations themselves never fail: unknown ids are ignored and
//! geometry is clamped. Errors only surface when loading configuration,
//! building a service registry, choosing a colour, or decoding persisted
//! state.

use thiserror::Error;

/// Errors raised while configuring or restoring the desktop.
#[derive(Debug, Error)]
pub enum DesktopError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two registry entries share the same service id.
    #[error("duplicate service id: {0}")]
    DuplicateService(String),

    /// A desktop colour is not a `#rrggbb` hex string.
    #[error("invalid colour: {0}")]
    InvalidColor(String),

    /// A JSON document could not be encoded or decoded.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted state was written by a newer version.
    #[error("unsupported snapshot version {found} (supported up to {supported})")]
    UnsupportedSnapshotVersion { found: u32, supported: u32 },
}

/// Result alias for desktop operations that can fail.
pub type Result<T> = std::result::Result<T, DesktopError>;
