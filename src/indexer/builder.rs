//! Register builder for a documentation tree.
//!
//! Documents are read one at a time, parsed into a [`RegisterEntry`] and
//! dropped before the next one is opened. No state carries across files, so
//! the same tree always yields the same register.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::RegisterConfig;
use crate::indexer::file_discovery::collect_files;
use crate::models::{RegisterEntry, SourceFile};
use crate::parsers::parse_document;
use crate::utils::relative_posix_path;

/// Build the full register for a documentation tree
///
/// Collects documents with [`collect_files`] and parses each one in
/// collection order.
///
/// # Errors
///
/// Returns an error if a category directory cannot be listed, or if any
/// collected document cannot be read or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use doc_register::{RegisterConfig, build_register};
///
/// let config = RegisterConfig::new("/home/alice/docs/qt");
/// let entries = build_register(&config)?;
/// println!("Indexed {} documents", entries.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_register(config: &RegisterConfig) -> Result<Vec<RegisterEntry>> {
    let files = collect_files(&config.root, &config.categories)?;
    info!("Collected {} documents under {}", files.len(), config.root.display());

    files.iter().map(|source| parse_file(&config.root, source)).collect()
}

/// Read and parse one collected document
pub fn parse_file(root: &Path, source: &SourceFile) -> Result<RegisterEntry> {
    let text = fs::read_to_string(&source.path)
        .with_context(|| format!("Failed to read document: {}", source.path.display()))?;
    let rel_path = relative_posix_path(root, &source.path)?;

    debug!("Parsing {} ({})", rel_path, source.category);
    Ok(parse_document(&rel_path, &source.category, &text))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::models::DocType;

    #[test]
    fn test_parse_file_uses_relative_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cpp = temp_dir.path().join("cpp");
        fs::create_dir(&cpp).expect("Failed to create cpp dir");
        fs::write(cpp.join("quick-ref.md"), "# Cheat Sheet\n").expect("Failed to write doc");

        let source = SourceFile::new("cpp", cpp.join("quick-ref.md"));
        let entry = parse_file(temp_dir.path(), &source).expect("parse should succeed");

        assert_eq!(entry.file, "cpp/quick-ref.md");
        assert_eq!(entry.category, "cpp");
        assert_eq!(entry.doc_type, DocType::QuickRef);
        assert_eq!(entry.title, "Cheat Sheet");
    }

    #[test]
    fn test_parse_file_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("README.md");
        fs::write(&path, [0x23, 0x20, 0xff, 0xfe]).expect("Failed to write doc");

        let result = parse_file(temp_dir.path(), &SourceFile::new("root", path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read document"));
    }

    #[test]
    fn test_build_register_missing_root_is_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = RegisterConfig::new(temp_dir.path().join("absent"));
        let entries = build_register(&config).expect("build should succeed");
        assert!(entries.is_empty());
    }
}
