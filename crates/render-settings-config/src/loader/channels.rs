//! Channel section reader.

use super::schema::{
    BOUND_KEYS, CHANNEL_KEYS, ensure_allowed_keys, expect_bool, expect_mapping, expect_number,
    expect_string, invalid_field, join_path, key_label,
};
use super::version::detect_version;
use crate::{
    ChannelMap, ChannelRange, ChannelSettings, ChannelWindow, SettingsError, SpecVersion,
};
use log::debug;
use serde_yaml::{Mapping, Value};

/// Entry fields after type checks, before version interpretation.
#[derive(Debug, Default)]
struct RawChannel {
    label: Option<String>,
    color: Option<String>,
    active: Option<bool>,
    min: Option<f64>,
    max: Option<f64>,
    start: Option<f64>,
    end: Option<f64>,
}

/// Validate the `channels` section of a document and build typed channels.
///
/// Channel keys must be integers and bound values must already be numeric;
/// nothing is coerced. The first violation aborts the read.
pub fn read_channels(document: &Value) -> Result<ChannelMap, SettingsError> {
    let channels = channels_section(document)?;

    let mut entries = Vec::with_capacity(channels.len());
    for (key, entry) in channels {
        let Some(index) = key.as_i64() else {
            return Err(SettingsError::InvalidChannelKey {
                key: key_label(key),
            });
        };
        let path = format!("channels.{index}");
        entries.push((index, read_entry(entry, &path)?));
    }

    let version = detect_version(document)?;
    let mut out = ChannelMap::new();
    for (index, raw) in entries {
        out.insert(index, into_settings(raw, version));
    }
    debug!("read {} channel(s) as version {version}", out.len());
    Ok(out)
}

/// Locate the non-empty `channels` mapping of a document.
pub(super) fn channels_section(document: &Value) -> Result<&Mapping, SettingsError> {
    let Some(channels) = document.get("channels") else {
        return Err(SettingsError::MissingChannels(
            "document has no `channels` key".to_string(),
        ));
    };
    let Some(channels) = channels.as_mapping() else {
        return Err(SettingsError::MissingChannels(
            "`channels` is not a mapping".to_string(),
        ));
    };
    if channels.is_empty() {
        return Err(SettingsError::MissingChannels(
            "`channels` is empty".to_string(),
        ));
    }
    Ok(channels)
}

/// Type-check a single channel entry.
fn read_entry(entry: &Value, path: &str) -> Result<RawChannel, SettingsError> {
    if entry.is_null() {
        return Ok(RawChannel::default());
    }
    let map = expect_mapping(entry, path)?;
    ensure_allowed_keys(map, CHANNEL_KEYS, path)?;

    let mut raw = RawChannel {
        label: optional(map, "label", path, expect_string)?,
        color: optional(map, "color", path, expect_string)?,
        active: optional(map, "active", path, expect_bool)?,
        ..RawChannel::default()
    };
    for key in BOUND_KEYS {
        let value = optional(map, key, path, expect_number)?;
        match *key {
            "min" => raw.min = value,
            "max" => raw.max = value,
            "start" => raw.start = value,
            _ => raw.end = value,
        }
    }

    ensure_ordered(raw.min, raw.max, &join_path(path, "min"), "min exceeds max")?;
    ensure_ordered(
        raw.start,
        raw.end,
        &join_path(path, "start"),
        "start exceeds end",
    )?;
    Ok(raw)
}

fn optional<T>(
    map: &Mapping,
    key: &str,
    path: &str,
    expect: fn(&Value, &str) -> Result<T, SettingsError>,
) -> Result<Option<T>, SettingsError> {
    map.get(key)
        .map(|value| expect(value, &join_path(path, key)))
        .transpose()
}

fn ensure_ordered(
    lower: Option<f64>,
    upper: Option<f64>,
    path: &str,
    message: &str,
) -> Result<(), SettingsError> {
    match (lower, upper) {
        (Some(lower), Some(upper)) if lower > upper => Err(invalid_field(path, message)),
        _ => Ok(()),
    }
}

fn into_settings(raw: RawChannel, version: SpecVersion) -> ChannelSettings {
    let (window, range) = match version {
        SpecVersion::V1 => (
            ChannelWindow {
                start: raw.min,
                end: raw.max,
            },
            ChannelRange::default(),
        ),
        SpecVersion::V2 => (
            ChannelWindow {
                start: raw.start,
                end: raw.end,
            },
            ChannelRange {
                min: raw.min,
                max: raw.max,
            },
        ),
    };
    ChannelSettings {
        label: raw.label,
        color: raw.color,
        active: raw.active,
        window,
        range,
    }
}

