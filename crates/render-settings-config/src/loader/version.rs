//! Settings version detection.

use super::schema::{has_any_key, join_path, key_label};
use crate::{SPEC_VERSION, SettingsError, SpecVersion};
use log::debug;
use serde_yaml::{Mapping, Value};

/// Keys that only exist in version 2 documents.
const V2_KEYS: &[&str] = &["start", "end"];
/// Keys that imply version 1 when no version is declared.
const V1_KEYS: &[&str] = &["min", "max"];

/// Determine the schema version of a settings document.
///
/// A declared `version` must be 1 or 2. Without one, channel entries vote:
/// `start`/`end` for version 2, `min`/`max` for version 1. Entries with
/// neither are skipped, and a document with no votes uses [`SPEC_VERSION`].
/// Votes for both versions are an error.
pub fn detect_version(document: &Value) -> Result<SpecVersion, SettingsError> {
    let declared = document.get("version");
    let channels = document.get("channels").and_then(Value::as_mapping);

    if let Some(value) = declared {
        let version = value
            .as_i64()
            .and_then(SpecVersion::from_number)
            .ok_or_else(|| SettingsError::UnsupportedVersion(key_label(value)))?;
        if version == SpecVersion::V1 {
            if let Some(channels) = channels {
                reject_v2_keys(channels)?;
            }
        }
        debug!("using declared settings version {version}");
        return Ok(version);
    }

    let mut v1_entry = None;
    let mut v2_entry = None;
    for (key, entry) in channels.into_iter().flatten() {
        let Some(entry) = entry.as_mapping() else {
            continue;
        };
        if v2_entry.is_none() && has_any_key(entry, V2_KEYS) {
            v2_entry = Some(key_label(key));
        }
        if v1_entry.is_none() && has_any_key(entry, V1_KEYS) {
            v1_entry = Some(key_label(key));
        }
    }

    let version = match (v1_entry, v2_entry) {
        (Some(v1), Some(v2)) => {
            return Err(SettingsError::AmbiguousVersion(format!(
                "channel {v1} uses min/max while channel {v2} uses start/end"
            )));
        }
        (Some(_), None) => SpecVersion::V1,
        (None, Some(_)) => SpecVersion::V2,
        (None, None) => SPEC_VERSION,
    };
    debug!("inferred settings version {version}");
    Ok(version)
}

/// Version 1 documents express the window with `min`/`max` only.
fn reject_v2_keys(channels: &Mapping) -> Result<(), SettingsError> {
    for (key, entry) in channels {
        let Some(entry) = entry.as_mapping() else {
            continue;
        };
        for name in V2_KEYS {
            if entry.contains_key(*name) {
                let path = join_path(&format!("channels.{}", key_label(key)), name);
                return Err(SettingsError::VersionMismatch { path, version: 1 });
            }
        }
    }
    Ok(())
}
