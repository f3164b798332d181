//! Data models for the documentation register.
//!
//! - [`SourceFile`] - A collected markdown file and the category it belongs to
//! - [`RegisterEntry`] - One register line summarizing a single document
//! - [`DocType`] - Document kind, derived from the filename
//! - [`RegisterSummary`] - Aggregate counts across a register

pub mod register;
pub mod source;

pub use register::{DocType, RegisterEntry, RegisterSummary};
pub use source::SourceFile;
