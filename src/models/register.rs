use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const README_FILENAME: &str = "README.md";
pub const QUICK_REF_FILENAME: &str = "quick-ref.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocType {
    Readme,
    QuickRef,
    Content,
}

impl DocType {
    /// Classify a document by its file name alone
    pub fn from_filename(name: &str) -> Self {
        match name {
            README_FILENAME => DocType::Readme,
            QUICK_REF_FILENAME => DocType::QuickRef,
            _ => DocType::Content,
        }
    }
}

/// One line of the register.
///
/// Field order is the serialized order. Set-valued fields are `BTreeSet`s so
/// they always serialize sorted and without duplicates; sequence-valued fields
/// keep document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterEntry {
    pub file: String,
    pub category: String,
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<String>,
    pub rules: Vec<String>,
    pub banned: Vec<String>,
    pub anti_patterns: Vec<String>,
    pub correct_patterns: Vec<String>,
    pub refs: Vec<String>,
    pub code_languages: BTreeSet<String>,
    pub has_examples: bool,
    pub tags: BTreeSet<String>,
    pub qt_apis: BTreeSet<String>,
    pub concepts: BTreeSet<String>,
}

/// Totals printed after a register is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterSummary {
    pub entries: usize,
    pub rules: usize,
    pub banned: usize,
    pub tags: usize,
}

impl RegisterSummary {
    pub fn from_entries(entries: &[RegisterEntry]) -> Self {
        Self {
            entries: entries.len(),
            rules: entries.iter().map(|e| e.rules.len()).sum(),
            banned: entries.iter().map(|e| e.banned.len()).sum(),
            tags: entries.iter().map(|e| e.tags.len()).sum(),
        }
    }
}
