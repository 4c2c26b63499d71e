//! Page discovery.
//!
//! Walks a project root and reports every renderable page with the layout
//! that would wrap it. Partials and layouts (`_`-prefixed files) and hidden
//! entries are skipped.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use trellis_core::{
    application::{EngineRegistry, ports::Filesystem},
    domain::{LayoutPolicy, content_type_for, find_layout_for},
    error::{RenderError, RenderResult},
};

/// A page found under the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredPage {
    /// Absolute path of the page.
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated.
    pub relative: String,
    pub content_type: &'static str,
    pub layout: Option<PathBuf>,
}

/// Scans a directory tree for pages.
pub struct PageDiscovery<'a> {
    root: &'a Path,
    engines: &'a EngineRegistry,
    policy: &'a LayoutPolicy,
    filesystem: &'a dyn Filesystem,
}

impl<'a> PageDiscovery<'a> {
    pub fn new(
        root: &'a Path,
        engines: &'a EngineRegistry,
        policy: &'a LayoutPolicy,
        filesystem: &'a dyn Filesystem,
    ) -> Self {
        Self {
            root,
            engines,
            policy,
            filesystem,
        }
    }

    /// All pages under the root, sorted by path.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn discover(&self) -> RenderResult<Vec<DiscoveredPage>> {
        let mut pages = Vec::new();

        let walker = WalkDir::new(self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));

        for walk_entry in walker {
            let walk_entry = walk_entry.map_err(|e| RenderError::Io {
                path: e
                    .path()
                    .map_or_else(|| self.root.to_path_buf(), Path::to_path_buf),
                reason: format!("directory walk error: {e}"),
            })?;

            if !walk_entry.file_type().is_file() || is_underscored(&walk_entry) {
                continue;
            }

            let path = walk_entry.path();
            if !self.engines.supports(path) {
                debug!(path = %path.display(), "Skipping file without a template engine");
                continue;
            }

            pages.push(self.describe(path)?);
        }

        debug!(count = pages.len(), "Discovered pages");
        Ok(pages)
    }

    fn describe(&self, path: &Path) -> RenderResult<DiscoveredPage> {
        let layout = find_layout_for(path, self.root, self.policy, |candidate| {
            self.filesystem.is_file(candidate)
        })?;

        let relative = path
            .strip_prefix(self.root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        Ok(DiscoveredPage {
            path: path.to_path_buf(),
            relative,
            content_type: content_type_for(path),
            layout,
        })
    }
}

fn file_name_starts_with(entry: &DirEntry, prefix: char) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with(prefix))
}

fn is_hidden(entry: &DirEntry) -> bool {
    file_name_starts_with(entry, '.')
}

fn is_underscored(entry: &DirEntry) -> bool {
    file_name_starts_with(entry, '_')
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{LocalFilesystem, engines::default_registry};

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn lists_pages_with_their_layouts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "_layout.tera", "{{ yield_content() }}");
        write(root, "index.tera", "home");
        write(root, "blog/_layout.tera", "{{ yield_content() }}");
        write(root, "blog/post.html.tera", "post");
        write(root, "blog/_sidebar.tera", "partial");
        write(root, "feed.xml.j2", "feed");
        write(root, "notes.txt", "not a template");
        write(root, ".git/config.tera", "hidden");

        let engines = default_registry();
        let policy = LayoutPolicy::MatchPage;
        let pages = PageDiscovery::new(root, &engines, &policy, &LocalFilesystem)
            .discover()
            .unwrap();

        let summary: Vec<_> = pages
            .iter()
            .map(|p| (p.relative.as_str(), p.layout.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("blog/post.html.tera", Some(root.join("blog/_layout.tera"))),
                ("feed.xml.j2", None),
                ("index.tera", Some(root.join("_layout.tera"))),
            ]
        );
        assert_eq!(pages[1].content_type, "application/xml");
    }

    #[test]
    fn empty_root_has_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        let engines = default_registry();
        let policy = LayoutPolicy::default();
        let pages = PageDiscovery::new(dir.path(), &engines, &policy, &LocalFilesystem)
            .discover()
            .unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn missing_root_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let engines = default_registry();
        let policy = LayoutPolicy::default();
        let result = PageDiscovery::new(&dir.path().join("nope"), &engines, &policy, &LocalFilesystem)
            .discover();
        assert!(matches!(result, Err(RenderError::Io { .. })));
    }
}
