//! Source map model.
//!
//! The decoded map is kept as the JSON object the bundler embedded. Only
//! `sourceRoot` and the string entries of `sources` are ever touched, so
//! index maps (`sections`), `null` fields and loosely typed values
//! (`"version": "3"`) reach the persisted file unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ExorcistError, Result};

const SOURCE_ROOT: &str = "sourceRoot";
const SOURCES: &str = "sources";

/// A decoded source map: any JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceMap(Map<String, Value>);

impl SourceMap {
    /// Parse a map from its JSON text. Anything but an object is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ExorcistError::Parse)
    }

    /// Serialize with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.0).map_err(ExorcistError::Parse)
    }

    /// Top-level field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Embedded `sourceRoot`, if present and not `null`.
    pub fn source_root(&self) -> Option<&Value> {
        self.0.get(SOURCE_ROOT).filter(|root| !root.is_null())
    }

    /// Set `sourceRoot`, keeping its position when it already exists.
    pub fn set_source_root(&mut self, root: impl Into<Value>) {
        self.0.insert(SOURCE_ROOT.to_string(), root.into());
    }

    /// Number of `sources` entries (0 for index maps).
    pub fn source_count(&self) -> usize {
        self.0
            .get(SOURCES)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// String entries of `sources`. `null` and non-string entries are skipped.
    pub fn sources_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.0
            .get_mut(SOURCES)
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(|entry| match entry {
                Value::String(source) => Some(source),
                _ => None,
            })
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_object(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for SourceMap {
    fn from(object: Map<String, Value>) -> Self {
        Self(object)
    }
}
