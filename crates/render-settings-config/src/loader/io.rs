//! IO helpers for reading settings files from disk.

use crate::SettingsError;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a settings file, distinguishing a missing path from an unreadable one.
pub(super) fn read_settings_file(path: Option<&Path>) -> Result<String, SettingsError> {
    let Some(path) = path else {
        return Err(SettingsError::MissingPath);
    };
    if path.as_os_str().is_empty() {
        return Err(SettingsError::MissingPath);
    }

    debug!("reading settings file (path={})", path.display());
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(SettingsError::NotFound(path.to_path_buf()))
        }
        Err(source) => Err(SettingsError::ReadFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}
