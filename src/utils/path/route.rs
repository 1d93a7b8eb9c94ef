//! URL helpers for reference comments and `sources` entries.

use std::path::Path;

/// Check if a `sources` entry is a URL rather than a filesystem path.
///
/// A single-letter scheme is treated as a Windows drive (`C:\src\a.js`),
/// not a URL.
///
/// # Examples
/// ```ignore
/// assert!(has_url_scheme("webpack:///src/a.js"));
/// assert!(has_url_scheme("https://example.com/a.js"));
/// assert!(!has_url_scheme("/abs/a.js"));
/// assert!(!has_url_scheme("C:\\src\\a.js"));
/// ```
#[inline]
pub fn has_url_scheme(entry: &str) -> bool {
    url::Url::parse(entry).is_ok_and(|url| url.scheme().len() > 1)
}

/// Last path segment of a destination, used as the default reference url.
///
/// Returns `None` for paths without a file name (`/`, `..`, empty).
///
/// # Examples
/// ```ignore
/// assert_eq!(base_name(Path::new("out/bundle.js.map")), Some("bundle.js.map".into()));
/// assert_eq!(base_name(Path::new("/")), None);
/// ```
#[inline]
pub fn base_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
