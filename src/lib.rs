//! Exorcist - move inline source maps out of JavaScript and CSS bundles.
//!
//! The asset is buffered in full, its trailing
//! `sourceMappingURL=data:...` comment is decoded and removed, the map is
//! written to a file (or any writer), and a reference comment pointing at
//! the external map takes its place.
//!
//! ```no_run
//! use exorcist::{Destination, Options, externalize};
//!
//! let outcome = externalize(
//!     std::io::stdin(),
//!     std::io::stdout(),
//!     Destination::file("dist/bundle.js.map"),
//!     Options::new().root("/src"),
//! )?;
//! if let Some(notice) = outcome.notice() {
//!     eprintln!("{notice}");
//! }
//! # Ok::<(), exorcist::ExorcistError>(())
//! ```

pub mod destination;
pub mod error;
pub mod extract;
pub mod logger;
pub mod map;
pub mod options;
pub mod rewrite;
pub mod stream;
pub mod utils;

pub use destination::Destination;
pub use error::{ExorcistError, Result};
pub use extract::{CommentStyle, Extracted, extract};
pub use map::SourceMap;
pub use options::Options;
pub use rewrite::MISSING_MAP_NOTICE;
pub use stream::{Exorcist, Outcome, externalize};
