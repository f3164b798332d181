use std::path::PathBuf;

/// Subdirectories scanned after the root README, in traversal order
pub const DEFAULT_CATEGORIES: [&str; 5] = ["build-rules", "cpp", "js", "qml", "rust"];

/// Register file name, written at the documentation root
pub const REGISTER_FILENAME: &str = "register.jsonl";

/// Where to read documents from and where to write the register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub categories: Vec<String>,
}

impl RegisterConfig {
    /// Default layout for a documentation root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output: root.join(REGISTER_FILENAME),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            root,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}
