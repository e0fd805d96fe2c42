//! Rendering settings models and YAML settings loading.
//!
//! This crate owns the settings schema, version detection, and the channel
//! validation used before settings are applied to an image.

mod error;
mod loader;
mod model;

/// Public error type returned by loading and validation APIs.
pub use error::{ErrorKind, SettingsError};
/// Loader entry points.
pub use loader::{detect_version, load_from_str, load_rendering_settings, read_channels};
/// Settings models.
pub use model::*;
