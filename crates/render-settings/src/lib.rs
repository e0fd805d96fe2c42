//! Command-line front-end for validating rendering settings files.
//!
//! The binary is a thin wrapper: it parses arguments, runs one command, and
//! turns [`SettingsError`](config::SettingsError) values into exit codes.

pub mod cli;
mod commands;

/// Re-export for convenience.
pub use render_settings_config as config;

pub use commands::{exit_code, run};

#[inline]
/// Initialize logging to stderr with millisecond timestamps.
///
/// Respects `RUST_LOG`; calling it more than once is harmless.
pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
}
