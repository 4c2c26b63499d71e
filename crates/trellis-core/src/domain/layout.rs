//! Layout lookup by directory-ancestor search.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::dialect::dialect_extension;
use crate::error::{RenderError, RenderResult};

/// File stem every layout file carries (`_layout.tera`, `_layout.j2`).
pub const LAYOUT_STEM: &str = "_layout";

/// Which dialect a layout file has to be written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// Look for `_layout.<ext>` with the requesting page's own dialect.
    #[default]
    MatchPage,
    /// Always look for `_layout.<ext>` with this one extension.
    Fixed(String),
}

impl LayoutPolicy {
    /// Build a policy from an optional configured extension.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension.map(|e| e.trim_start_matches('.')) {
            Some(ext) if !ext.is_empty() => Self::Fixed(ext.to_ascii_lowercase()),
            _ => Self::MatchPage,
        }
    }

    /// Layout file name to probe for `page`, if the page has a dialect at all.
    pub fn layout_file_name(&self, page: &Path) -> Option<String> {
        let extension = match self {
            Self::MatchPage => dialect_extension(page)?,
            Self::Fixed(ext) => ext.clone(),
        };
        Some(format!("{LAYOUT_STEM}.{extension}"))
    }
}

/// Find the nearest layout for `filename`, walking from its directory up to
/// (and including) `root`.
///
/// `is_file` answers existence probes; the search itself does no I/O. A file
/// outside `root` is rejected before anything is probed. A page is never its
/// own layout.
pub fn find_layout_for<F>(
    filename: &Path,
    root: &Path,
    policy: &LayoutPolicy,
    is_file: F,
) -> RenderResult<Option<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let relative = filename
        .strip_prefix(root)
        .map_err(|_| RenderError::PathOutsideRoot {
            path: filename.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let Some(layout_name) = policy.layout_file_name(filename) else {
        return Ok(None);
    };

    let mut dir = relative.parent();
    while let Some(current) = dir {
        let candidate = root.join(current).join(&layout_name);
        debug!(candidate = %candidate.display(), "Probing for layout");
        if candidate != filename && is_file(&candidate) {
            return Ok(Some(candidate));
        }
        dir = current.parent();
    }

    Ok(None)
}
