use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::models::SourceFile;
use crate::models::register::README_FILENAME;
use crate::models::source::ROOT_CATEGORY;

const MARKDOWN_EXTENSION: &str = "md";

/// Collect the documents to index, in register order.
///
/// The root `README.md` comes first (category `root`), then each category
/// directory in the given order: its `README.md` first, then every other
/// `*.md` file sorted by name. Category directories are not searched
/// recursively.
///
/// # Errors
///
/// Returns an error if a category directory exists but cannot be listed.
/// Missing category directories are skipped.
pub fn collect_files(root: &Path, categories: &[String]) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    let root_readme = root.join(README_FILENAME);
    if root_readme.is_file() {
        files.push(SourceFile::new(ROOT_CATEGORY, root_readme));
    } else {
        warn!("No root README at {}", root_readme.display());
    }

    for category in categories {
        let dir = root.join(category);
        if !dir.is_dir() {
            debug!("Skipping missing category directory {}", dir.display());
            continue;
        }

        let documents = markdown_files(&dir)?;
        let (readme, others): (Vec<_>, Vec<_>) = documents
            .into_iter()
            .partition(|path| path.file_name().is_some_and(|name| name == README_FILENAME));

        debug!("Category {}: {} documents", category, readme.len() + others.len());
        files.extend(
            readme.into_iter().chain(others).map(|path| SourceFile::new(category.as_str(), path)),
        );
    }

    Ok(files)
}

/// Markdown files directly inside `dir`, sorted by file name
fn markdown_files(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
        {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}
