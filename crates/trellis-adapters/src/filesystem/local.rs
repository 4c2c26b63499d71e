//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use trellis_core::{
    application::ports::Filesystem,
    error::{RenderError, RenderResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> RenderResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> RenderError {
    RenderError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.tera");
        std::fs::write(&path, "hello").unwrap();

        let fs = LocalFilesystem::new();
        assert!(fs.is_file(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn directories_are_not_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!LocalFilesystem.is_file(dir.path()));
    }

    #[test]
    fn missing_file_maps_to_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.tera");

        match LocalFilesystem.read_to_string(&path) {
            Err(RenderError::Io { path: reported, reason }) => {
                assert_eq!(reported, path);
                assert!(reason.starts_with("Failed to read file"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
