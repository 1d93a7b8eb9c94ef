//! Command-line interface module.
//!
//! Stdin is piped through [`exorcist::externalize`]; the cleaned asset goes
//! to stdout (or the optional OUTPUT file) and diagnostics go to stderr.

mod args;

pub use args::Cli;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use exorcist::utils::path::absolutize;
use exorcist::{Destination, Outcome, externalize, log};

use crate::config;

/// Run one extraction as described by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let options = config::load(cli)?.cwd(&cwd);

    let map_file = absolutize(&config::expand_tilde(&cli.map_file), &cwd);
    let destination = Destination::file(&map_file);

    let stdin = io::stdin().lock();
    let outcome = match &cli.output {
        Some(output) => {
            let mut buffer = Vec::new();
            let outcome = externalize(stdin, &mut buffer, destination, options)?;
            write_output(&config::expand_tilde(output), &buffer)?;
            outcome
        }
        None => externalize(stdin, io::stdout().lock(), destination, options)?,
    };

    report(&outcome, &map_file);
    Ok(())
}

/// Write the cleaned asset to a file, creating parent directories.
fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    file.write_all(content)
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    Ok(())
}

fn report(outcome: &Outcome, map_file: &Path) {
    match outcome {
        Outcome::Externalized { url, .. } => {
            exorcist::debug!("map"; "{} (referenced as {})", map_file.display(), url);
        }
        Outcome::MissingMap { notice, .. } => {
            log!("missing-map"; "{}", notice);
        }
    }
}

/// Process exit status for a failed run.
///
/// Mirrors the OS error number when the failure came from the OS, else 1.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<io::Error>()?.raw_os_error())
        .and_then(|errno| u8::try_from(errno.clamp(1, 255)).ok())
        .unwrap_or(1)
}
