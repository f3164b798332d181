//! Register persistence
//!
//! The register is a JSON Lines file: one [`RegisterEntry`] object per line,
//! UTF-8, with non-ASCII text written as-is and a space after each `,` and
//! `:` separator. Each build truncates and rewrites the whole file.
//!
//! [`RegisterEntry`]: crate::models::RegisterEntry

pub mod persistence;

pub use persistence::{SpacedFormatter, read_register, to_register_line, write_register};
