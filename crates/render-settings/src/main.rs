//! Entry point for the `render-settings` binary.

use clap::Parser;
use log::debug;
use render_settings::cli::Cli;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    render_settings::init_logging();

    let cli = Cli::parse();
    debug!("parsed arguments: {:?}", cli.command);
    let mut stdout = io::stdout().lock();
    match render_settings::run(cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(render_settings::exit_code(&err))
        }
    }
}
