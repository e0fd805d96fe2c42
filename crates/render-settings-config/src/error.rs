//! Error types for settings loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while loading or validating rendering settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No settings file was provided.
    #[error("settings file argument not provided")]
    MissingPath,
    /// The settings file does not exist.
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Reading the settings file failed.
    #[error("failed to read settings file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The contents are not valid YAML.
    #[error("failed to parse settings: {0}")]
    ParseFailed(#[from] serde_yaml::Error),
    /// The document has no usable `channels` mapping.
    #[error("no channels found: {0}")]
    MissingChannels(String),
    /// A channel is keyed by something other than an integer.
    #[error("invalid channel key `{key}`: expected integer")]
    InvalidChannelKey { key: String },
    /// A specific field failed validation.
    #[error("invalid settings at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// The `version` field is present but not a supported version.
    #[error("unsupported settings version {0}: expected 1 or 2")]
    UnsupportedVersion(String),
    /// Version inference found keys from both versions.
    #[error("cannot determine settings version: {0}; specify `version`")]
    AmbiguousVersion(String),
    /// A key is not valid under the document's version.
    #[error("invalid settings at {path}: not supported by version {version}")]
    VersionMismatch { path: String, version: u8 },
}

/// Coarse classification of a [`SettingsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be located or read.
    Usage,
    /// The document lacks a `channels` section.
    MissingChannels,
    /// A key or value has the wrong type or shape.
    InvalidValue,
    /// The version is unsupported or inconsistent.
    Version,
}

impl ErrorKind {
    /// Process exit status reported by the CLI for this kind.
    pub const fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Usage => 103,
            ErrorKind::MissingChannels => 104,
            ErrorKind::InvalidValue => 105,
            ErrorKind::Version => 124,
        }
    }
}

impl SettingsError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SettingsError::MissingPath
            | SettingsError::NotFound(_)
            | SettingsError::ReadFailed { .. }
            | SettingsError::ParseFailed(_) => ErrorKind::Usage,
            SettingsError::MissingChannels(_) => ErrorKind::MissingChannels,
            SettingsError::InvalidChannelKey { .. } | SettingsError::InvalidField { .. } => {
                ErrorKind::InvalidValue
            }
            SettingsError::UnsupportedVersion(_)
            | SettingsError::AmbiguousVersion(_)
            | SettingsError::VersionMismatch { .. } => ErrorKind::Version,
        }
    }

    /// Shorthand for `self.kind().exit_code()`.
    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(SettingsError::MissingPath.exit_code(), 103);
        assert_eq!(
            SettingsError::MissingChannels("empty".to_string()).exit_code(),
            104
        );
        assert_eq!(
            SettingsError::InvalidChannelKey {
                key: "GFP".to_string()
            }
            .exit_code(),
            105
        );
        assert_eq!(
            SettingsError::UnsupportedVersion("0".to_string()).exit_code(),
            124
        );
    }
}
