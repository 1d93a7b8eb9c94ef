//! Relativizing `sources` entries against a base directory.

use std::path::Path;

use crate::map::SourceMap;
use crate::utils::path::{absolutize, has_url_scheme, relative_to, to_slash};

/// Rewrite every path-like entry of `sources` relative to `base`.
///
/// Relative entries and a relative `base` are resolved against `cwd` first,
/// the same way a bundler running in `cwd` would have resolved them. URL
/// entries (`webpack://`, `https://`) and non-string entries are left alone.
pub fn relativize(map: &mut SourceMap, base: &Path, cwd: &Path) {
    let base = absolutize(base, cwd);
    for source in map.sources_mut() {
        if has_url_scheme(source) {
            continue;
        }
        let absolute = absolutize(Path::new(source.as_str()), cwd);
        *source = to_slash(&relative_to(&absolute, &base));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn map_with(sources: Value) -> SourceMap {
        SourceMap::from_json(&json!({ "sources": sources }).to_string()).unwrap()
    }

    fn sources(map: &SourceMap) -> Value {
        map.get("sources").cloned().unwrap_or(Value::Null)
    }

    #[test]
    fn test_absolute_sources_under_base() {
        let mut map = map_with(json!([
            "/home/dev/app/src/main.js",
            "/home/dev/app/node_modules/lib/index.js"
        ]));
        relativize(&mut map, Path::new("/home/dev/app"), Path::new("/"));
        assert_eq!(sources(&map), json!(["src/main.js", "node_modules/lib/index.js"]));
    }

    #[test]
    fn test_sources_outside_base_climb() {
        let mut map = map_with(json!(["/home/dev/shared/util.js"]));
        relativize(&mut map, Path::new("/home/dev/app"), Path::new("/"));
        assert_eq!(sources(&map), json!(["../shared/util.js"]));
    }

    #[test]
    fn test_relative_entries_resolve_against_cwd() {
        let mut map = map_with(json!(["src/a.js"]));
        relativize(&mut map, Path::new("/work/src"), Path::new("/work"));
        assert_eq!(sources(&map), json!(["a.js"]));
    }

    #[test]
    fn test_relative_base_resolves_against_cwd() {
        let mut map = map_with(json!(["/work/lib/b.js"]));
        relativize(&mut map, Path::new("lib"), Path::new("/work"));
        assert_eq!(sources(&map), json!(["b.js"]));
    }

    #[test]
    fn test_urls_and_non_strings_untouched() {
        let mut map = map_with(json!(["webpack:///src/a.js", null, 3]));
        relativize(&mut map, Path::new("/work"), Path::new("/work"));
        assert_eq!(sources(&map), json!(["webpack:///src/a.js", null, 3]));
    }

    #[test]
    fn test_index_map_is_left_alone() {
        let mut map = SourceMap::from_json(r#"{"version":3,"sections":[]}"#).unwrap();
        relativize(&mut map, Path::new("/work"), Path::new("/work"));
        assert_eq!(map.get("sources"), None);
    }
}
