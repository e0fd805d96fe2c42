//! Rendering settings models.

use serde::{Serialize, Serializer};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Settings schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecVersion {
    /// Absolute pixel bounds via `min`/`max`.
    V1,
    /// Rescaled bounds via `start`/`end`, optional channel range via `min`/`max`.
    V2,
}

/// Version assumed when a document neither declares nor implies one.
pub const SPEC_VERSION: SpecVersion = SpecVersion::V2;

impl SpecVersion {
    /// Numeric form as written in the `version` field.
    pub const fn as_u8(self) -> u8 {
        match self {
            SpecVersion::V1 => 1,
            SpecVersion::V2 => 2,
        }
    }

    /// Map a declared version number, if supported.
    pub fn from_number(value: i64) -> Option<Self> {
        match value {
            1 => Some(SpecVersion::V1),
            2 => Some(SpecVersion::V2),
            _ => None,
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for SpecVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Rendering window of a channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ChannelWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
}

/// Intensity range a channel's window may span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ChannelRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Validated settings for one channel.
///
/// Under version 1 `min`/`max` are the absolute window and land in `window`;
/// `range` is only populated by version 2 documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChannelSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    pub window: ChannelWindow,
    pub range: ChannelRange,
}

/// Channel settings keyed by channel index.
pub type ChannelMap = BTreeMap<i64, ChannelSettings>;

/// Fully validated view of a settings document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderingSettings {
    pub version: SpecVersion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greyscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
    pub channels: ChannelMap,
}

/// A loaded settings document: the raw structure plus its detected version.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderingDocument {
    pub(crate) raw: Value,
    pub(crate) version: SpecVersion,
}

impl RenderingDocument {
    /// The document exactly as parsed.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consume the document, returning the parsed structure.
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Declared or inferred schema version.
    pub fn version(&self) -> SpecVersion {
        self.version
    }
}
