//! Error types for the extraction pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T, E = ExorcistError> = std::result::Result<T, E>;

/// Everything that can abort externalizing a source map.
///
/// All variants are fatal. A missing map in non-strict mode is not an
/// error, see [`crate::Outcome::MissingMap`].
#[derive(Debug, Error)]
pub enum ExorcistError {
    #[error("inline source map is not valid JSON")]
    Parse(#[source] serde_json::Error),

    #[error("inline source map could not be decoded: {0}")]
    Decode(String),

    #[error("no inline source map found in the input")]
    MissingMap,

    #[error("a url must be given when the map is written to a stream instead of a file")]
    MissingUrl,

    #[error("invalid map destination `{0}`: expected a path to a file")]
    InvalidDestination(PathBuf),

    #[error("failed to write source map to {target}")]
    Persist {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not valid UTF-8")]
    InvalidUtf8(#[source] std::string::FromUtf8Error),

    #[error("failed to read input")]
    Input(#[source] std::io::Error),

    #[error("failed to write output")]
    Output(#[source] std::io::Error),

    #[error("failed to get current working directory")]
    WorkingDir(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_persist_display_names_target() {
        let err = ExorcistError::Persist {
            target: "out/bundle.js.map".to_string(),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        let display = format!("{err}");
        assert!(display.contains("out/bundle.js.map"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_url_message_mentions_url() {
        let display = ExorcistError::MissingUrl.to_string();
        assert!(display.contains("url"));
    }
}
