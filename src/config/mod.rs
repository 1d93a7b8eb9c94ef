//! Configuration for the `exorcist` binary.
//!
//! Options come from two layers, later ones winning:
//!
//! | Layer                  | Source                                      |
//! |------------------------|---------------------------------------------|
//! | `exorcist.toml`        | `-C <FILE>`, or searched upward from cwd    |
//! | command-line flags     | `--url`, `--root`, `--base`, `-e`           |
//!
//! ```toml
//! url = "https://cdn.example.com/app.js.map"
//! root = "/src"
//! base = "."              # relative to this file
//! error-on-missing = true
//! ```

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use exorcist::{Options, debug, log};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Default config file name
pub const CONFIG_FILE: &str = "exorcist.toml";

/// Contents of `exorcist.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FileConfig {
    /// Reference url for the extracted map
    #[serde(default)]
    pub url: Option<String>,

    /// `sourceRoot` override
    #[serde(default)]
    pub root: Option<String>,

    /// Base directory for `sources`, relative to the config file
    #[serde(default)]
    pub base: Option<PathBuf>,

    /// Fail when no inline map is present
    #[serde(default)]
    pub error_on_missing: Option<bool>,
}

impl FileConfig {
    /// Load from `path`, warning about unknown keys.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), ignored.join(", "));
        }

        if let Some(base) = config.base.take() {
            let dir = path.parent().unwrap_or_else(|| Path::new(""));
            config.base = Some(dir.join(base));
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Merge CLI flags over file values.
    pub fn into_options(mut self, cli: &Cli) -> Options {
        update_option(&mut self.url, cli.url.as_ref());
        update_option(&mut self.root, cli.root.as_ref());
        update_option(&mut self.base, cli.base.as_ref().map(|b| expand_tilde(b)).as_ref());
        update_option(&mut self.error_on_missing, cli.error_on_missing.as_ref());

        Options {
            url: self.url,
            root: self.root,
            base: self.base,
            error_on_missing: self.error_on_missing.unwrap_or(false),
            cwd: None,
        }
    }
}

/// Build the extraction options for this invocation.
pub fn load(cli: &Cli) -> Result<Options> {
    let file = match resolve_config_path(cli) {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            FileConfig::from_path(&path).context("Failed to load config")?
        }
        None => FileConfig::default(),
    };
    Ok(file.into_options(cli))
}

/// Explicit `-C` path, otherwise the nearest `exorcist.toml`.
fn resolve_config_path(cli: &Cli) -> Option<PathBuf> {
    match &cli.config {
        Some(path) => Some(expand_tilde(path)),
        None => find_config_file(Path::new(CONFIG_FILE)),
    }
}

/// Find config file by searching upward from current directory
///
/// ```text
/// /home/user/app/src/   ← cwd
/// /home/user/app/exorcist.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Update config option if CLI value is provided
fn update_option<T: Clone>(config_option: &mut Option<T>, cli_option: Option<&T>) {
    if let Some(value) = cli_option {
        *config_option = Some(value.clone());
    }
}

// ============================================================================
// tests
// ============================================================================
