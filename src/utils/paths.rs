use std::borrow::Cow;
use std::env;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Path of `path` relative to `root`, joined with forward slashes on every
/// platform so register entries are identical across systems.
///
/// # Errors
///
/// Returns an error if `path` is not under `root`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use doc_register::utils::relative_posix_path;
///
/// let rel = relative_posix_path(Path::new("/docs"), Path::new("/docs/cpp/threading.md"))?;
/// assert_eq!(rel, "cpp/threading.md");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn relative_posix_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).with_context(|| {
        format!("Document {} is outside root {}", path.display(), root.display())
    })?;

    let parts: Vec<Cow<'_, str>> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}

/// Display form of a register path for the `stats` report: `~` stands in for
/// the home directory when the path lies under it.
///
/// Matching is per path component, so `/home/al` does not shorten
/// `/home/alice/docs`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use doc_register::utils::format_path_with_tilde;
///
/// // "~/docs/register.jsonl" when HOME=/home/alice
/// let shown = format_path_with_tilde(Path::new("/home/alice/docs/register.jsonl"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = env::var_os("HOME").map(PathBuf::from);
    tilde_relative_to(path, home.as_deref())
}

/// `path` with `home` replaced by `~`, or the plain display form when there is
/// no home or the path is outside it
pub(crate) fn tilde_relative_to(path: &Path, home: Option<&Path>) -> String {
    let Some(rest) = home
        .filter(|home| !home.as_os_str().is_empty())
        .and_then(|home| path.strip_prefix(home).ok())
    else {
        return path.display().to_string();
    };

    if rest.as_os_str().is_empty() {
        "~".to_string()
    } else {
        format!("~/{}", rest.display())
    }
}
