//! Extension-to-engine mapping.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::TemplateEngine;
use crate::domain::dialect_extension;
use crate::error::{RenderError, RenderResult};

/// Maps a lowercase file extension to the engine that renders it.
#[derive(Clone, Default)]
pub struct EngineRegistry {
    engines: BTreeMap<String, Arc<dyn TemplateEngine>>,
}

impl EngineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `engine` for `extension` (leading dot optional, any case).
    /// A later registration for the same extension replaces the earlier one.
    pub fn register(&mut self, extension: &str, engine: Arc<dyn TemplateEngine>) {
        let key = extension.trim_start_matches('.').to_ascii_lowercase();
        self.engines.insert(key, engine);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, extension: &str, engine: Arc<dyn TemplateEngine>) -> Self {
        self.register(extension, engine);
        self
    }

    /// Engine for `path`, chosen by its simple trailing extension.
    pub fn for_path(&self, path: &Path) -> RenderResult<Arc<dyn TemplateEngine>> {
        let extension = dialect_extension(path).unwrap_or_default();
        self.engines
            .get(&extension)
            .cloned()
            .ok_or_else(|| RenderError::UnsupportedTemplateType {
                path: path.to_path_buf(),
                extension,
            })
    }

    /// Whether some engine handles `path`.
    pub fn supports(&self, path: &Path) -> bool {
        dialect_extension(path).is_some_and(|ext| self.engines.contains_key(&ext))
    }

    /// Registered extensions, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        self.engines.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.engines.iter().map(|(ext, e)| (ext, e.dialect())))
            .finish()
    }
}
