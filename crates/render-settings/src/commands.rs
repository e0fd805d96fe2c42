//! Command handlers.

use crate::cli::{Cli, Command};
use anyhow::Context;
use log::info;
use render_settings_config::{RenderingSettings, SettingsError, load_rendering_settings};
use std::io::Write;
use std::path::Path;

/// Exit status for failures that are not settings errors.
const GENERIC_FAILURE: u8 = 1;

/// Run a parsed command, writing its output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match cli.command {
        Command::Check { file } => check(file.as_deref(), out),
        Command::Show { file, pretty } => show(file.as_deref(), pretty, out),
    }
}

/// Map a command failure to the process exit status.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<SettingsError>()
        .map(SettingsError::exit_code)
        .unwrap_or(GENERIC_FAILURE)
}

fn check(file: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    let settings = load(file)?;
    let name = file.map(|path| path.display().to_string()).unwrap_or_default();
    writeln!(
        out,
        "{name}: version {}, {} channel(s)",
        settings.version,
        settings.channels.len()
    )
    .context("failed to write output")?;
    Ok(())
}

fn show(file: Option<&Path>, pretty: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let settings = load(file)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&settings)
    } else {
        serde_json::to_string(&settings)
    }
    .context("failed to encode settings")?;
    writeln!(out, "{rendered}").context("failed to write output")?;
    Ok(())
}

fn load(file: Option<&Path>) -> anyhow::Result<RenderingSettings> {
    let document = load_rendering_settings(file)?;
    let settings = document.settings()?;
    info!(
        "settings valid (version={}, channels={})",
        settings.version,
        settings.channels.len()
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("settings.yml");
        fs::write(&path, contents).expect("write");
        path
    }

    fn run_args(args: &[&str]) -> (anyhow::Result<()>, String) {
        let cli = Cli::try_parse_from(args).expect("args");
        let mut out = Vec::new();
        let result = run(cli, &mut out);
        (result, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn check_prints_summary() {
        let temp = TempDir::new().expect("tmp");
        let path = write_settings(&temp, "channels:\n  1:\n    min: 0\n    max: 10\n  2:\n    label: GFP\n");
        let path_arg = path.to_str().expect("path");
        let (result, output) = run_args(&["render-settings", "check", path_arg]);
        result.expect("check");
        assert_eq!(output, format!("{path_arg}: version 1, 2 channel(s)\n"));
    }

    #[test]
    fn show_prints_typed_json() {
        let temp = TempDir::new().expect("tmp");
        let path = write_settings(
            &temp,
            "greyscale: false\nchannels:\n  1:\n    label: DAPI\n    start: 5\n    end: 50\n",
        );
        let (result, output) = run_args(&["render-settings", "show", path.to_str().expect("path")]);
        result.expect("show");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value["version"], 2);
        assert_eq!(value["greyscale"], false);
        assert_eq!(value["channels"]["1"]["label"], "DAPI");
        assert_eq!(value["channels"]["1"]["window"]["start"], 5.0);
        assert_eq!(value["channels"]["1"]["window"]["end"], 50.0);
    }

    #[test]
    fn missing_file_maps_to_103() {
        let temp = TempDir::new().expect("tmp");
        let path = temp.path().join("missing.yml");
        let (result, output) = run_args(&["render-settings", "check", path.to_str().expect("path")]);
        let err = result.unwrap_err();
        assert_eq!(exit_code(&err), 103);
        assert!(output.is_empty());
    }

    #[test]
    fn settings_errors_map_to_their_codes() {
        let cases = [
            ("version: 1\n", 104),
            ("channels:\n  GFP:\n    label: foo\n", 105),
            ("channels:\n  1:\n    start: foo\n", 105),
            ("version: 0\nchannels:\n  1:\n    label: foo\n", 124),
            ("channels:\n  1:\n    start: 1\n    min: 0\n", 124),
        ];
        for (contents, expected) in cases {
            let temp = TempDir::new().expect("tmp");
            let path = write_settings(&temp, contents);
            let (result, _) = run_args(&["render-settings", "check", path.to_str().expect("path")]);
            let err = result.unwrap_err();
            assert_eq!(exit_code(&err), expected, "{contents:?}");
        }
    }

    #[test]
    fn other_failures_use_generic_code() {
        let err = anyhow::anyhow!("broken pipe");
        assert_eq!(exit_code(&err), GENERIC_FAILURE);
    }
}
