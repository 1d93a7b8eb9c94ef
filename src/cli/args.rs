//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Externalize the inline source map of the asset read from stdin.
///
/// The cleaned asset, ending in a `sourceMappingURL` comment that points at
/// the extracted map, is written to stdout (or OUTPUT).
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to write the extracted source map to
    #[arg(value_name = "MAP_FILE", value_hint = clap::ValueHint::FilePath)]
    pub map_file: PathBuf,

    /// Write the cleaned asset here instead of stdout
    #[arg(value_name = "OUTPUT", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Url the map is served from (default: name of MAP_FILE)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Override the map's `sourceRoot` (default: embedded value or '')
    #[arg(short, long)]
    pub root: Option<String>,

    /// Rewrite `sources` entries relative to this directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub base: Option<PathBuf>,

    /// Fail when the input carries no inline source map
    #[arg(
        short,
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub error_on_missing: Option<bool>,

    /// Config file path (default: exorcist.toml, searched upward from cwd)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Parse the process arguments, see [`fold_bool_values`].
    pub fn parse_args() -> Self {
        Self::parse_from(fold_bool_values(std::env::args_os()))
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(fold_bool_values(args))
    }
}

/// Attach a literal `true`/`false` that follows `-e`/`--error-on-missing`
/// to the flag, so `-e true out.map` keeps `out.map` as MAP_FILE while
/// `-e out.map` still means `-e=true`.
fn fold_bool_values<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into).peekable();
    let mut folded = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--" {
            folded.push(arg);
            folded.extend(args);
            break;
        }
        if (arg == "-e" || arg == "--error-on-missing")
            && let Some(value) = args.next_if(|next| next == "true" || next == "false")
        {
            let mut flag = OsString::from("--error-on-missing=");
            flag.push(&value);
            folded.push(flag);
            continue;
        }
        folded.push(arg);
    }
    folded
}
