//! Where the extracted map JSON is persisted.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::error::{ExorcistError, Result};
use crate::utils::path::base_name;

/// Target for the map JSON.
pub enum Destination {
    /// A file, created along with its parent directories and overwritten.
    File(PathBuf),
    /// Any writer. It is flushed and dropped (closed) after the payload.
    Sink(Box<dyn Write>),
}

impl Destination {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn sink(writer: impl Write + 'static) -> Self {
        Self::Sink(Box::new(writer))
    }

    /// Reject destinations that cannot hold a map before anything is read.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::File(path) if base_name(path).is_none() => {
                Err(ExorcistError::InvalidDestination(path.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Name used for the reference comment when no url is given.
    ///
    /// Sinks have none.
    pub fn default_url(&self) -> Option<String> {
        match self {
            Self::File(path) => base_name(path),
            Self::Sink(_) => None,
        }
    }

    /// Write the full `json` payload, consuming the destination.
    pub fn persist(self, json: &str) -> Result<()> {
        match self {
            Self::File(path) => write_file(&path, json).map_err(|source| ExorcistError::Persist {
                target: path.display().to_string(),
                source,
            }),
            Self::Sink(mut writer) => {
                writer
                    .write_all(json.as_bytes())
                    .and_then(|()| writer.flush())
                    .map_err(|source| ExorcistError::Persist {
                        target: "stream".to_string(),
                        source,
                    })?;
                debug!("map"; "wrote {} bytes to stream", json.len());
                Ok(())
            }
        }
    }
}

fn write_file(path: &Path, json: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    debug!("map"; "wrote {}", path.display());
    Ok(())
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Sink(_) => f.write_str("Sink(..)"),
        }
    }
}

impl From<PathBuf> for Destination {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Path> for Destination {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<&str> for Destination {
    fn from(path: &str) -> Self {
        Self::File(PathBuf::from(path))
    }
}
