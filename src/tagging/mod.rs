//! Topical vocabulary for register entries.
//!
//! Concepts come from a static keyword table; tags are the union of title
//! words, API tokens, code languages and concepts.

pub mod concepts;
pub mod tags;

pub use concepts::{concepts_for, derive_concepts};
pub use tags::{STOP_WORDS, build_tags};
