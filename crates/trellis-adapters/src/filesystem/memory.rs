//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use trellis_core::{
    application::ports::Filesystem,
    error::{RenderError, RenderResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same file table, so a test can keep a handle and add
/// files after the renderer has been built.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), content.into());
    }

    /// Remove a file, returning its content if it existed.
    pub fn remove(&self, path: &Path) -> Option<String> {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        files.sort();
        files
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> RenderResult<String> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .ok_or_else(|| RenderError::Io {
                path: path.to_path_buf(),
                reason: "File does not exist in memory filesystem".into(),
            })
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_files() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        handle.insert("/site/page.tera", "x");

        assert!(fs.is_file(Path::new("/site/page.tera")));
        assert_eq!(fs.read_to_string(Path::new("/site/page.tera")).unwrap(), "x");
    }

    #[test]
    fn missing_file_is_io_error() {
        let fs = MemoryFilesystem::new();
        assert!(matches!(
            fs.read_to_string(Path::new("/nope")),
            Err(RenderError::Io { .. })
        ));
        assert!(!fs.is_file(Path::new("/nope")));
    }

    #[test]
    fn remove_and_list() {
        let fs = MemoryFilesystem::new()
            .with_file("/b", "2")
            .with_file("/a", "1");
        assert_eq!(fs.list_files(), vec![PathBuf::from("/a"), PathBuf::from("/b")]);

        assert_eq!(fs.remove(Path::new("/a")).as_deref(), Some("1"));
        assert_eq!(fs.list_files(), vec![PathBuf::from("/b")]);
    }
}
