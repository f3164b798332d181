//! Register building for a documentation tree
//!
//! # Error Handling Strategy
//!
//! The indexer is all-or-nothing, unlike the extractors it drives:
//!
//! - **Missing inputs**: A missing root README or category directory is not an
//!   error; it simply contributes no entries.
//!
//! - **I/O failures**: Unreadable directories or files abort the run with the
//!   offending path in the error context.
//!
//! - **Decoding failures**: Documents that are not valid UTF-8 abort the run.
//!
//! Every file that can be read produces an entry, however sparse.

pub mod builder;
pub mod file_discovery;

pub use builder::{build_register, parse_file};
pub use file_discovery::collect_files;
