//! Path normalization utilities.
//!
//! Provides consistent path handling for map destinations and `sources`:
//! - `absolutize` - join with cwd and fold `.`/`..` without touching the disk
//! - `relative_to` - express one path relative to another (like `path.relative`)
//! - `to_slash` - render a path with `/` separators for use inside a map

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute and lexically normalized.
///
/// Unlike `canonicalize()` this never hits the filesystem, so it works for
/// `sources` entries that only existed on the bundler's machine.
///
/// # Example
/// ```ignore
/// let abs = absolutize(Path::new("src/../lib/a.js"), Path::new("/work"));
/// assert_eq!(abs, PathBuf::from("/work/lib/a.js"));
/// ```
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    normalize_lexically(&joined)
}

/// Fold `.` and `..` components. `..` above the root is dropped.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Express `target` relative to the directory `base`.
///
/// Both paths must already be absolute and normalized (see [`absolutize`]).
/// Paths on different prefixes (Windows drives) have no relative form, so
/// `target` is returned unchanged.
///
/// # Examples
/// ```ignore
/// relative_to(Path::new("/p/src/a.js"), Path::new("/p"))      -> "src/a.js"
/// relative_to(Path::new("/p/other/b.js"), Path::new("/p/src")) -> "../other/b.js"
/// ```
pub fn relative_to(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<_> = target.components().collect();
    let base_parts: Vec<_> = base.components().collect();

    if target_parts.first() != base_parts.first() {
        return target.to_path_buf();
    }

    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[common..] {
        rel.push(part.as_os_str());
    }
    rel
}

/// Render a path with forward slashes regardless of platform.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}
