//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Lexical path handling (`absolutize`, `relative_to`, `to_slash`)
//! - [`route`]: URL helpers (`has_url_scheme`, `base_name`)

pub mod fs;
pub mod route;

pub use fs::{absolutize, relative_to, to_slash};
pub use route::{base_name, has_url_scheme};
