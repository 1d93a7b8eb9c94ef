//! Exorcist - externalize inline source maps from stdin.

mod cli;
mod config;

use std::process::ExitCode;

use clap::ColorChoice;
use cli::Cli;
use exorcist::log;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    exorcist::logger::set_verbose(cli.verbose);

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{:#}", err);
            cli::exit_code(&err)
        }
    }
}
