//! Detecting and detaching an inline source map.
//!
//! # Module Structure
//!
//! ```text
//! extract/
//! ├── annotation   # regex scan for `sourceMappingURL=data:` comments
//! ├── decode       # base64 / percent decoding of the payload
//! └── mod.rs       # extract() (this file)
//! ```
//!
//! The annotation is searched from the end of the text, so this only runs
//! on the fully buffered asset.

mod annotation;
mod decode;

pub use annotation::{Annotation, CommentStyle, PayloadEncoding};

use crate::debug;
use crate::error::Result;
use crate::map::SourceMap;

/// Result of scanning an asset for an inline map.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// An inline map was found and removed from the body.
    Found {
        cleaned: String,
        map: SourceMap,
        style: CommentStyle,
    },
    /// No inline map. The body is returned unchanged.
    NotFound { body: String },
}

impl Extracted {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Separate the inline source map from `body`.
///
/// The last inline annotation supplies the map. Every inline annotation line
/// is stripped so stale maps cannot linger in the output; comments that point
/// at external files are kept.
pub fn extract(body: String) -> Result<Extracted> {
    let annotations = annotation::find_all(&body);
    let Some(last) = annotations.last() else {
        debug!("extract"; "no inline source map");
        return Ok(Extracted::NotFound { body });
    };

    let json = decode::decode_payload(last.payload, last.encoding)?;
    let map = SourceMap::from_json(&json)?;
    let style = last.style;

    debug!(
        "extract";
        "found {:?} comment, {} source(s), {} annotation line(s) removed",
        style,
        map.source_count(),
        annotations.len()
    );

    let cleaned = annotation::strip_all(&body, &annotations);
    Ok(Extracted::Found {
        cleaned,
        map,
        style,
    })
}
