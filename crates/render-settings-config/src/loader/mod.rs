//! Settings loader with version detection and channel validation.
//!
//! Reads a YAML document, checks that it carries a `channels` section,
//! resolves its schema version, and exposes a typed view on demand.

mod channels;
mod io;
mod schema;
mod version;


pub use channels::read_channels;
pub use version::detect_version;

use crate::{RenderingDocument, RenderingSettings, SettingsError};
use log::{debug, info};
use serde_yaml::Value;
use std::path::Path;

/// Load a settings document from a path.
///
/// Fails when no path is given, the file is missing or unreadable, the
/// document has no `channels`, or its version cannot be resolved. The
/// returned document holds the parsed structure unchanged.
pub fn load_rendering_settings(path: Option<&Path>) -> Result<RenderingDocument, SettingsError> {
    let contents = io::read_settings_file(path)?;
    let document = load_from_str(&contents)?;
    if let Some(path) = path {
        info!(
            "loaded rendering settings (path={}, version={})",
            path.display(),
            document.version
        );
    }
    Ok(document)
}

/// Load a settings document from YAML contents.
pub fn load_from_str(contents: &str) -> Result<RenderingDocument, SettingsError> {
    debug!("parsing settings (len={})", contents.len());
    let raw: Value = serde_yaml::from_str(contents)?;
    document_from_value(raw)
}

fn document_from_value(raw: Value) -> Result<RenderingDocument, SettingsError> {
    channels::channels_section(&raw)?;
    let version = detect_version(&raw)?;
    Ok(RenderingDocument { raw, version })
}

impl RenderingDocument {
    /// Validate the whole document and build its typed settings.
    pub fn settings(&self) -> Result<RenderingSettings, SettingsError> {
        let map = schema::expect_mapping(&self.raw, "")?;
        let (greyscale, z, t) = schema::validate_top_level(map)?;
        let channels = read_channels(&self.raw)?;
        debug!(
            "validated settings (version={}, channels={})",
            self.version,
            channels.len()
        );
        Ok(RenderingSettings {
            version: self.version,
            greyscale,
            z,
            t,
            channels,
        })
    }
}

impl TryFrom<Value> for RenderingDocument {
    type Error = SettingsError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        document_from_value(raw)
    }
}
