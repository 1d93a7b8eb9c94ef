//! Turning an extraction result into the final asset text and map JSON.

mod sources;

pub use sources::relativize;

use crate::debug;
use crate::error::{ExorcistError, Result};
use crate::extract::Extracted;
use crate::options::Options;

/// Notice reported when the asset carries no inline map.
pub const MISSING_MAP_NOTICE: &str = "The code that you piped into exorcist contains no source map!\n\
Therefore it was piped through as is and no external map file generated.";

/// What should be written where, once a map has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewritten {
    /// Map detached: `json` goes to the destination, `text` downstream.
    Separated {
        text: String,
        url: String,
        json: String,
    },
    /// No map: `text` is the untouched input.
    PassThrough { text: String },
}

/// Apply `options` to an extraction result.
///
/// `default_url` is the destination's own name, if it has one. Nothing is
/// written here; errors are raised before the caller touches the destination.
pub fn rewrite(
    extracted: Extracted,
    options: &Options,
    default_url: Option<String>,
) -> Result<Rewritten> {
    let (cleaned, mut map, style) = match extracted {
        Extracted::NotFound { body } => {
            if options.error_on_missing {
                return Err(ExorcistError::MissingMap);
            }
            return Ok(Rewritten::PassThrough { text: body });
        }
        Extracted::Found {
            cleaned,
            map,
            style,
        } => (cleaned, map, style),
    };

    let url = options
        .url
        .clone()
        .or(default_url)
        .ok_or(ExorcistError::MissingUrl)?;

    match &options.root {
        Some(root) => map.set_source_root(root.as_str()),
        None if map.source_root().is_none() => map.set_source_root(""),
        None => {}
    }

    if let Some(base) = &options.base {
        let cwd = match &options.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir().map_err(ExorcistError::WorkingDir)?,
        };
        relativize(&mut map, base, &cwd);
        debug!("rewrite"; "sources relative to {}", base.display());
    }

    let json = map.to_json_pretty()?;

    let mut text = cleaned;
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&style.reference(&url));

    Ok(Rewritten::Separated { text, url, json })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::CommentStyle;
    use crate::map::SourceMap;
    use serde_json::{Value, json};

    const MAP: &str =
        r#"{"version":3,"file":"generated.js","sources":["/app/src/a.js"],"mappings":"AAAA"}"#;

    fn found_with(cleaned: &str, style: CommentStyle, map: &str) -> Extracted {
        Extracted::Found {
            cleaned: cleaned.to_string(),
            map: SourceMap::from_json(map).unwrap(),
            style,
        }
    }

    fn found(cleaned: &str, style: CommentStyle) -> Extracted {
        found_with(cleaned, style, MAP)
    }

    fn json_of(rewritten: &Rewritten) -> Value {
        match rewritten {
            Rewritten::Separated { json, .. } => serde_json::from_str(json).unwrap(),
            Rewritten::PassThrough { .. } => panic!("expected a separated map"),
        }
    }

    #[test]
    fn test_defaults() {
        let rewritten = rewrite(
            found("var a;\n", CommentStyle::Line),
            &Options::new(),
            Some("bundle.js.map".to_string()),
        )
        .unwrap();

        let json = json_of(&rewritten);
        assert_eq!(json["sourceRoot"], "");
        assert_eq!(json["file"], "generated.js");
        assert_eq!(json["mappings"], "AAAA");

        let Rewritten::Separated { text, url, .. } = rewritten else {
            unreachable!()
        };
        assert_eq!(url, "bundle.js.map");
        assert_eq!(text, "var a;\n//# sourceMappingURL=bundle.js.map");
    }

    #[test]
    fn test_block_style_preserved() {
        let rewritten = rewrite(
            found("a{}", CommentStyle::Block),
            &Options::new(),
            Some("to.css.map".to_string()),
        )
        .unwrap();
        let Rewritten::Separated { text, .. } = rewritten else {
            panic!("expected a separated map");
        };
        assert_eq!(text, "a{}\n/*# sourceMappingURL=to.css.map */");
    }

    #[test]
    fn test_explicit_url_wins() {
        let options = Options::new().url("http://my.site/bundle.js.map");
        let rewritten = rewrite(
            found("x\n", CommentStyle::Line),
            &options,
            Some("bundle.js.map".to_string()),
        )
        .unwrap();
        let Rewritten::Separated { text, .. } = rewritten else {
            panic!("expected a separated map");
        };
        assert!(text.ends_with("//# sourceMappingURL=http://my.site/bundle.js.map"));
    }

    #[test]
    fn test_embedded_source_root_kept() {
        let mut extracted = found("x\n", CommentStyle::Line);
        if let Extracted::Found { map, .. } = &mut extracted {
            map.set_source_root("/embedded");
        }
        let rewritten = rewrite(extracted, &Options::new(), Some("m.map".into())).unwrap();
        assert_eq!(json_of(&rewritten)["sourceRoot"], "/embedded");
    }

    #[test]
    fn test_root_override() {
        let mut extracted = found("x\n", CommentStyle::Line);
        if let Extracted::Found { map, .. } = &mut extracted {
            map.set_source_root("/embedded");
        }
        let options = Options::new().root("https://x/src");
        let rewritten = rewrite(extracted, &options, Some("m.map".into())).unwrap();
        assert_eq!(json_of(&rewritten)["sourceRoot"], "https://x/src");
    }

    #[test]
    fn test_base_relativizes_sources() {
        let options = Options::new().base("/app");
        let rewritten = rewrite(
            found("x\n", CommentStyle::Line),
            &options,
            Some("m.map".into()),
        )
        .unwrap();
        assert_eq!(json_of(&rewritten)["sources"][0], "src/a.js");
    }

    #[test]
    fn test_relative_base_uses_given_cwd() {
        let options = Options::new().base("src").cwd("/app");
        let rewritten = rewrite(
            found("x\n", CommentStyle::Line),
            &options,
            Some("m.map".into()),
        )
        .unwrap();
        assert_eq!(json_of(&rewritten)["sources"][0], "a.js");
    }

    #[test]
    fn test_null_source_root_replaced_by_default() {
        let extracted = found_with("x\n", CommentStyle::Line, r#"{"sourceRoot":null,"mappings":""}"#);
        let rewritten = rewrite(extracted, &Options::new(), Some("m.map".into())).unwrap();
        assert_eq!(json_of(&rewritten), json!({ "sourceRoot": "", "mappings": "" }));
    }

    #[test]
    fn test_index_map_only_gains_source_root() {
        let map = json!({
            "version": 3,
            "file": null,
            "sections": [{ "offset": { "line": 0, "column": 0 }, "map": { "version": 3, "sources": ["/app/a.js"], "mappings": "" } }]
        });
        let extracted = found_with("x\n", CommentStyle::Line, &map.to_string());
        let options = Options::new().base("/app");
        let rewritten = rewrite(extracted, &options, Some("m.map".into())).unwrap();

        let mut expected = map;
        expected["sourceRoot"] = json!("");
        assert_eq!(json_of(&rewritten), expected);
    }

    #[test]
    fn test_missing_url_for_unnamed_destination() {
        let err = rewrite(found("x\n", CommentStyle::Line), &Options::new(), None).unwrap_err();
        assert!(matches!(err, ExorcistError::MissingUrl));
    }

    #[test]
    fn test_missing_map_pass_through() {
        let extracted = Extracted::NotFound {
            body: "plain()".to_string(),
        };
        let rewritten = rewrite(extracted, &Options::new(), None).unwrap();
        assert_eq!(
            rewritten,
            Rewritten::PassThrough {
                text: "plain()".to_string()
            }
        );
    }

    #[test]
    fn test_missing_map_strict() {
        let extracted = Extracted::NotFound {
            body: "plain()".to_string(),
        };
        let options = Options::new().error_on_missing(true);
        let err = rewrite(extracted, &options, Some("m.map".into())).unwrap_err();
        assert!(matches!(err, ExorcistError::MissingMap));
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let rewritten = rewrite(
            found("x\n", CommentStyle::Line),
            &Options::new(),
            Some("m.map".into()),
        )
        .unwrap();
        let Rewritten::Separated { json, .. } = rewritten else {
            panic!("expected a separated map");
        };
        assert!(json.starts_with("{\n  \"version\": 3,"));
    }
}
