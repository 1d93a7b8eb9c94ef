//! Caller-supplied knobs for a single extraction.

use std::path::PathBuf;

/// Options controlling how the extracted map is referenced and rewritten.
///
/// # Example
///
/// ```
/// use exorcist::Options;
///
/// let options = Options::new()
///     .url("https://cdn.example.com/bundle.js.map")
///     .root("/src")
///     .error_on_missing(true);
/// assert!(options.error_on_missing);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Reference url written into the asset. Defaults to the map file name.
    pub url: Option<String>,
    /// Replacement for the map's `sourceRoot`.
    pub root: Option<String>,
    /// Directory that `sources` entries are made relative to.
    pub base: Option<PathBuf>,
    /// Fail instead of passing the asset through when no map is present.
    pub error_on_missing: bool,
    /// Directory relative `base` and `sources` resolve against. Defaults to
    /// the process working directory.
    pub cwd: Option<PathBuf>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn error_on_missing(mut self, strict: bool) -> Self {
        self.error_on_missing = strict;
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}
