//! Schema validation helpers for YAML settings documents.

use crate::SettingsError;
use serde_yaml::{Mapping, Value};

/// Keys accepted at the top level of a document.
pub(super) const TOP_LEVEL_KEYS: &[&str] = &["version", "channels", "greyscale", "z", "t"];
/// Keys accepted inside a channel entry.
pub(super) const CHANNEL_KEYS: &[&str] = &["label", "color", "active", "min", "max", "start", "end"];
/// Numeric bound keys of a channel entry.
pub(super) const BOUND_KEYS: &[&str] = &["min", "max", "start", "end"];

/// Validate the top level of a document, excluding `version` and `channels`.
///
/// Returns the parsed `greyscale`, `z` and `t` values.
pub(super) fn validate_top_level(
    map: &Mapping,
) -> Result<(Option<bool>, Option<u32>, Option<u32>), SettingsError> {
    ensure_allowed_keys(map, TOP_LEVEL_KEYS, "")?;

    let greyscale = map
        .get("greyscale")
        .map(|value| expect_bool(value, "greyscale"))
        .transpose()?;
    let z = map
        .get("z")
        .map(|value| expect_plane_index(value, "z"))
        .transpose()?;
    let t = map
        .get("t")
        .map(|value| expect_plane_index(value, "t"))
        .transpose()?;
    Ok((greyscale, z, t))
}

/// Expect a YAML mapping or return a typed error.
pub(super) fn expect_mapping<'a>(value: &'a Value, path: &str) -> Result<&'a Mapping, SettingsError> {
    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(invalid_field(path, "expected mapping")),
    }
}

/// Expect a YAML string or return a typed error.
pub(super) fn expect_string(value: &Value, path: &str) -> Result<String, SettingsError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_field(path, "expected string"))
}

/// Expect a YAML boolean or return a typed error.
pub(super) fn expect_bool(value: &Value, path: &str) -> Result<bool, SettingsError> {
    value
        .as_bool()
        .ok_or_else(|| invalid_field(path, "expected bool"))
}

/// Expect an integer or float; strings are never coerced.
pub(super) fn expect_number(value: &Value, path: &str) -> Result<f64, SettingsError> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| invalid_field(path, "expected number")),
        _ => Err(invalid_field(path, "expected number")),
    }
}

/// Expect a 1-based plane index.
fn expect_plane_index(value: &Value, path: &str) -> Result<u32, SettingsError> {
    let Some(index) = value.as_u64() else {
        return Err(invalid_field(path, "expected positive integer"));
    };
    match u32::try_from(index) {
        Ok(index) if index >= 1 => Ok(index),
        _ => Err(invalid_field(path, "expected positive integer")),
    }
}

/// Ensure a mapping contains only allowed string keys.
pub(super) fn ensure_allowed_keys(
    map: &Mapping,
    allowed: &[&str],
    path: &str,
) -> Result<(), SettingsError> {
    for key in map.keys() {
        match key.as_str() {
            Some(name) if allowed.contains(&name) => {}
            _ => return Err(invalid_field(&join_path(path, &key_label(key)), "unknown key")),
        }
    }
    Ok(())
}

/// Whether a mapping contains any of the given keys.
pub(super) fn has_any_key(map: &Mapping, keys: &[&str]) -> bool {
    keys.iter().any(|key| map.contains_key(*key))
}

/// Render a mapping key for error messages.
pub(super) fn key_label(key: &Value) -> String {
    match key {
        Value::String(name) => name.clone(),
        Value::Number(number) => number.to_string(),
        other => serde_yaml::to_string(other)
            .map(|rendered| rendered.trim().to_string())
            .unwrap_or_else(|_| "<unprintable>".to_string()),
    }
}

/// Join nested paths for better error messages.
pub(super) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
pub(super) fn invalid_field(path: &str, message: &str) -> SettingsError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    SettingsError::InvalidField {
        path: normalized_path.to_string(),
        message: message.to_string(),
    }
}
