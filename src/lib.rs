//! Doc Register - Summarize a markdown documentation tree as JSON Lines
//!
//! This library scans a documentation root and builds a register with one
//! entry per markdown file, meant to be grepped or loaded by a retrieval
//! system instead of searching raw markdown. It supports:
//!
//! - Collecting the root README and a fixed set of category directories
//! - Extracting titles, headings, `RULE:`/`BANNED:` lines and cross-references
//! - Pairing discouraged and recommended snippets from sections and tables
//! - Deriving normalized topic tags from a static concept table
//!
//! # Example
//!
//! ```no_run
//! use doc_register::{RegisterConfig, build_register, write_register};
//!
//! let config = RegisterConfig::new("/home/alice/docs/qt");
//! let entries = build_register(&config)?;
//! write_register(&config.output, &entries)?;
//! println!("Indexed {} documents", entries.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod register_storage;
pub mod tagging;
pub mod utils;

// Re-export commonly used types
pub use config::RegisterConfig;
pub use indexer::builder::build_register;
pub use models::{DocType, RegisterEntry, RegisterSummary};
pub use parsers::parse_document;
pub use register_storage::{read_register, write_register};
