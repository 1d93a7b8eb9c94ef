//! Buffered transform from an asset with an inline map to one without.
//!
//! Input is accumulated chunk by chunk and all work happens once, in
//! [`Exorcist::finish`]. The destination write settles before any text is
//! handed back, so a returned `Ok` means the map was persisted.


use std::io::{self, Read, Write};

use crate::debug;
use crate::destination::Destination;
use crate::error::{ExorcistError, Result};
use crate::extract::extract;
use crate::options::Options;
use crate::rewrite::{MISSING_MAP_NOTICE, Rewritten, rewrite};

/// Successful end of one transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The map was written to the destination.
    Externalized {
        text: String,
        url: String,
        map_json: String,
    },
    /// No inline map: `text` is the input unchanged and nothing was written.
    MissingMap { text: String, notice: &'static str },
}

impl Outcome {
    /// Text to forward downstream.
    pub fn text(&self) -> &str {
        match self {
            Self::Externalized { text, .. } | Self::MissingMap { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Externalized { text, .. } | Self::MissingMap { text, .. } => text,
        }
    }

    /// The missing-map notice, if one was raised.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Externalized { .. } => None,
            Self::MissingMap { notice, .. } => Some(notice),
        }
    }
}

/// One asset's worth of buffered input plus where its map should go.
///
/// # Example
///
/// ```no_run
/// use exorcist::{Destination, Exorcist, Options};
///
/// let mut transform = Exorcist::new(Destination::file("dist/app.js.map"), Options::new())?;
/// transform.push(b"console.log(1);\n");
/// let outcome = transform.finish()?;
/// print!("{}", outcome.text());
/// # Ok::<(), exorcist::ExorcistError>(())
/// ```
#[derive(Debug)]
pub struct Exorcist {
    destination: Destination,
    options: Options,
    body: Vec<u8>,
}

impl Exorcist {
    /// Create a transform. Fails early on a destination that cannot hold a map.
    pub fn new(destination: Destination, options: Options) -> Result<Self> {
        destination.validate()?;
        Ok(Self {
            destination,
            options,
            body: Vec::new(),
        })
    }

    /// Append a chunk of input.
    pub fn push(&mut self, chunk: &[u8]) {
        self.body.extend_from_slice(chunk);
    }

    /// Number of bytes buffered so far.
    pub fn buffered(&self) -> usize {
        self.body.len()
    }

    /// End of input: extract, rewrite, persist.
    pub fn finish(self) -> Result<Outcome> {
        let Self {
            destination,
            options,
            body,
        } = self;

        let body = String::from_utf8(body).map_err(ExorcistError::InvalidUtf8)?;
        debug!("stream"; "processing {} bytes", body.len());

        let extracted = extract(body)?;
        match rewrite(extracted, &options, destination.default_url())? {
            Rewritten::PassThrough { text } => Ok(Outcome::MissingMap {
                text,
                notice: MISSING_MAP_NOTICE,
            }),
            Rewritten::Separated { text, url, json } => {
                destination.persist(&json)?;
                Ok(Outcome::Externalized {
                    text,
                    url,
                    map_json: json,
                })
            }
        }
    }
}

impl Write for Exorcist {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Pipe `input` through a transform into `output`.
///
/// Reads to the end, persists the map, then writes the final text. If
/// reading fails the destination is never touched.
pub fn externalize<R, W>(
    mut input: R,
    mut output: W,
    destination: Destination,
    options: Options,
) -> Result<Outcome>
where
    R: Read,
    W: Write,
{
    let mut transform = Exorcist::new(destination, options)?;
    io::copy(&mut input, &mut transform).map_err(ExorcistError::Input)?;

    let outcome = transform.finish()?;
    output
        .write_all(outcome.text().as_bytes())
        .and_then(|()| output.flush())
        .map_err(ExorcistError::Output)?;
    Ok(outcome)
}
