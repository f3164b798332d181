use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default documentation root.
///
/// The tool is installed in a directory one level below the documents it
/// indexes (for example `docs/tools/doc-register`), so the root is the parent
/// of the directory holding the executable.
pub fn default_docs_root() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    docs_root_for_executable(&exe)
        .with_context(|| format!("Executable has no grandparent directory: {}", exe.display()))
}

fn docs_root_for_executable(exe: &std::path::Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_root_is_two_levels_up() {
        let root = docs_root_for_executable(Path::new("/home/dev/docs/tools/doc-register"));
        assert_eq!(root, Some(PathBuf::from("/home/dev/docs")));
    }

    #[test]
    fn test_executable_at_filesystem_root() {
        assert_eq!(docs_root_for_executable(Path::new("/doc-register")), None);
    }

    #[test]
    fn test_default_docs_root_resolves() {
        // Test binaries live in target/<profile>/deps, which always has a grandparent
        assert!(default_docs_root().is_ok());
    }
}
