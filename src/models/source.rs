use std::path::PathBuf;

/// Category name used for the root-level README
pub const ROOT_CATEGORY: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub category: String,
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(category: impl Into<String>, path: PathBuf) -> Self {
        Self { category: category.into(), path }
    }
}
