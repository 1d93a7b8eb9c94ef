//! Locating `sourceMappingURL` data-URI comments in asset text.
//!
//! Recognized forms (one per line, `@` is the legacy marker):
//!
//! ```text
//! //# sourceMappingURL=data:application/json;base64,eyJ2ZXJzaW9uIjozfQ==
//! /*# sourceMappingURL=data:application/json;charset=utf-8,%7B%7D */
//! ```
//!
//! Comments pointing at an external file (`//# sourceMappingURL=app.js.map`)
//! never match: there is nothing inline to extract.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Syntax of the comment carrying the annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//# sourceMappingURL=...` (JavaScript)
    Line,
    /// `/*# sourceMappingURL=... */` (CSS, or JavaScript)
    Block,
}

impl CommentStyle {
    /// Build a reference comment in this style pointing at `url`.
    pub fn reference(self, url: &str) -> String {
        match self {
            Self::Line => format!("//# sourceMappingURL={url}"),
            Self::Block => format!("/*# sourceMappingURL={url} */"),
        }
    }
}

/// How the map JSON is encoded inside the data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    Base64,
    Percent,
}

/// One inline-map comment found in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    pub style: CommentStyle,
    pub encoding: PayloadEncoding,
    /// Encoded payload after the comma of the data URI.
    pub payload: &'a str,
    /// Byte range of the whole line, including its `\n` if any.
    pub line: Range<usize>,
}

static RE_INLINE_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?P<open>//|/\*)[@#][ \t]*sourceMappingURL=data:(?P<meta>[^,\r\n]*),(?P<data>[^\r\n]*?)[ \t]*(?P<close>\*/)?[ \t]*\r?$",
    )
    .unwrap()
});

/// Find every inline-map annotation in `body`, in document order.
pub fn find_all(body: &str) -> Vec<Annotation<'_>> {
    RE_INLINE_MAP
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let data = caps.name("data")?;
            let (style, payload) = match (&caps["open"], caps.name("close")) {
                ("//", None) => (CommentStyle::Line, data.as_str()),
                // `*/` belongs to the payload of a line comment
                ("//", Some(close)) => (CommentStyle::Line, &body[data.start()..close.end()]),
                (_, Some(_)) => (CommentStyle::Block, data.as_str()),
                // unterminated block comment
                (_, None) => return None,
            };

            let mut end = whole.end();
            if body[end..].starts_with('\n') {
                end += 1;
            }

            Some(Annotation {
                style,
                encoding: encoding_of(&caps["meta"]),
                payload,
                line: whole.start()..end,
            })
        })
        .collect()
}

/// Remove every annotation line from `body`.
pub fn strip_all(body: &str, annotations: &[Annotation<'_>]) -> String {
    let mut cleaned = String::with_capacity(body.len());
    let mut cursor = 0;
    for annotation in annotations {
        cleaned.push_str(&body[cursor..annotation.line.start]);
        cursor = annotation.line.end;
    }
    cleaned.push_str(&body[cursor..]);
    cleaned
}

/// `application/json;charset=utf-8;base64` -> Base64
fn encoding_of(meta: &str) -> PayloadEncoding {
    if meta
        .split(';')
        .any(|param| param.trim().eq_ignore_ascii_case("base64"))
    {
        PayloadEncoding::Base64
    } else {
        PayloadEncoding::Percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_last(body: &str) -> Option<Annotation<'_>> {
        find_all(body).pop()
    }

    #[test]
    fn test_line_annotation() {
        let body = "var a = 1;\n//# sourceMappingURL=data:application/json;base64,e30=\n";
        let found = find_last(body).unwrap();
        assert_eq!(found.style, CommentStyle::Line);
        assert_eq!(found.encoding, PayloadEncoding::Base64);
        assert_eq!(found.payload, "e30=");
        assert_eq!(&body[found.line.clone()], "//# sourceMappingURL=data:application/json;base64,e30=\n");
    }

    #[test]
    fn test_block_annotation() {
        let body = "a{color:red}\n/*# sourceMappingURL=data:application/json;charset=utf-8;base64,e30= */";
        let found = find_last(body).unwrap();
        assert_eq!(found.style, CommentStyle::Block);
        assert_eq!(found.payload, "e30=");
        assert_eq!(found.line.end, body.len());
    }

    #[test]
    fn test_legacy_marker_and_percent_encoding() {
        let body = "x()\n  //@ sourceMappingURL=data:application/json,%7B%7D";
        let found = find_last(body).unwrap();
        assert_eq!(found.encoding, PayloadEncoding::Percent);
        assert_eq!(found.payload, "%7B%7D");
    }

    #[test]
    fn test_external_reference_is_not_inline() {
        assert!(find_last("x()\n//# sourceMappingURL=bundle.js.map\n").is_none());
        assert!(find_last("a{}\n/*# sourceMappingURL=to.css.map */").is_none());
    }

    #[test]
    fn test_unterminated_block_is_ignored() {
        assert!(find_last("a{}\n/*# sourceMappingURL=data:application/json;base64,e30=").is_none());
    }

    #[test]
    fn test_annotation_must_start_line() {
        assert!(find_last("x(); //# sourceMappingURL=data:application/json;base64,e30=").is_none());
    }

    #[test]
    fn test_crlf_line_endings() {
        let body = "x()\r\n//# sourceMappingURL=data:application/json;base64,e30=\r\nmore";
        let found = find_last(body).unwrap();
        assert_eq!(found.payload, "e30=");
        assert_eq!(strip_all(body, &[found]), "x()\r\nmore");
    }

    #[test]
    fn test_last_annotation_wins() {
        let body = "//# sourceMappingURL=data:application/json;base64,AAAA\nx()\n//# sourceMappingURL=data:application/json;base64,e30=\n";
        let all = find_all(body);
        assert_eq!(all.len(), 2);
        assert_eq!(find_last(body).unwrap().payload, "e30=");
        assert_eq!(strip_all(body, &all), "x()\n");
    }

    #[test]
    fn test_reference_comment() {
        assert_eq!(
            CommentStyle::Line.reference("bundle.js.map"),
            "//# sourceMappingURL=bundle.js.map"
        );
        assert_eq!(
            CommentStyle::Block.reference("to.css.map"),
            "/*# sourceMappingURL=to.css.map */"
        );
    }
}
