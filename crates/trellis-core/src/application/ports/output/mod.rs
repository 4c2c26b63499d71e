//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the render pipeline needs from the outside.
//! The `trellis-adapters` crate provides implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::RenderOptions;
use crate::error::RenderResult;

/// Port for reading template files.
///
/// Implemented by:
/// - `trellis_adapters::filesystem::LocalFilesystem` (production)
/// - `trellis_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> RenderResult<String>;

    /// Check if path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Port for a template dialect.
///
/// Implemented by:
/// - `trellis_adapters::engines::TeraEngine` (`.tera`)
/// - `trellis_adapters::engines::JinjaEngine` (`.j2`)
pub trait TemplateEngine: Send + Sync {
    /// Short dialect name used in logs and error messages.
    fn dialect(&self) -> &str;

    /// Render `source` (the contents of `path`).
    ///
    /// Everything a template can call back into (includes, content capture,
    /// yielding content) goes through `scope`, synchronously, while this call
    /// is running.
    fn render(&self, source: &str, path: &Path, scope: Arc<dyn RenderScope>)
    -> RenderResult<String>;
}

/// Capability handed to an engine for the duration of one render.
///
/// Implemented by `crate::application::RenderContext`.
pub trait RenderScope: Send + Sync {
    /// `render(partial=...)` / `render(template=...)` from inside a template.
    fn include(&self, options: &RenderOptions) -> RenderResult<String>;

    /// Store a captured block under `name`.
    fn capture(&self, name: &str, rendered: String);

    /// Default content for `None`, otherwise the named block if captured.
    fn content(&self, name: Option<&str>) -> Option<String>;

    /// Whether `content(Some(name))` would return something.
    fn has_content(&self, name: &str) -> bool;

    /// File currently rendering (the innermost frame).
    fn active_file(&self) -> Option<PathBuf>;
}
