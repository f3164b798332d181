//! Markdown extractors for register entries
//!
//! # Error Handling Strategy
//!
//! Extraction never fails. Documents that lack the expected structure degrade
//! to empty fields:
//!
//! - **Missing headings**: `title` and `subtitle` become empty strings.
//! - **Missing tables or code blocks**: pattern lists stay empty.
//! - **Unmatched markers**: rules, banned items, refs and API tokens are empty.
//!
//! Only I/O and decoding can fail, and those live in the indexer, which reads
//! each file before handing its text to [`parse_document`].

pub mod code_blocks;
pub mod document;
pub mod markdown;
pub mod patterns;
pub mod references;
pub mod structure;
pub mod tables;

pub use code_blocks::{code_blocks_in_section, first_code_line};
pub use document::parse_document;
pub use tables::table_column_values;
