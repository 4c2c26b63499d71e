//! The per-request render context.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::application::{lock, parser::Parser, ports::RenderScope};
use crate::domain::{ContentBuffers, ContentKey, RenderOptions, TemplateReference};
use crate::error::{RenderError, RenderResult};

/// State shared by every template rendered for one request: the default
/// content slot, named content blocks, and the [`Parser`] driving them.
///
/// Cloning is cheap and yields a handle to the same state; that handle is what
/// engines receive as their [`RenderScope`]. No lock is held while a nested
/// template renders, so templates can call back in at any depth.
#[derive(Clone)]
pub struct RenderContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    buffers: Mutex<ContentBuffers>,
    /// Typed error behind the most recent failed callback, kept so the parser
    /// can surface it instead of the engine's stringified wrapper.
    failure: Mutex<Option<RenderError>>,
    parser: Parser,
}

impl RenderContext {
    /// Create a context driving `parser`.
    pub fn new(parser: Parser) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                buffers: Mutex::new(ContentBuffers::new()),
                failure: Mutex::new(None),
                parser,
            }),
        }
    }

    pub fn parser(&self) -> &Parser {
        &self.inner.parser
    }

    /// Render a file through this context's parser.
    pub fn parse_file(&self, filename: &Path) -> RenderResult<String> {
        self.inner.parser.parse_file(self, filename)
    }

    // ── Content capture ──────────────────────────────────────────────────

    /// Append page output to the default content slot.
    pub fn append_content(&self, text: &str) {
        lock(&self.inner.buffers).append_default(text);
    }

    pub fn default_content(&self) -> String {
        lock(&self.inner.buffers).default_content().to_string()
    }

    /// Run `producer` and store what it renders under `name`.
    pub fn content_for<F>(&self, name: &str, producer: F) -> RenderResult<()>
    where
        F: FnOnce() -> RenderResult<String>,
    {
        let rendered = producer()?;
        self.set_content_for(name, rendered);
        Ok(())
    }

    /// Store `value` under `name`, replacing any earlier block.
    pub fn set_content_for(&self, name: &str, value: String) {
        debug!(block = name, bytes = value.len(), "Captured content block");
        lock(&self.inner.buffers).set(ContentKey::from_name(Some(name)), value);
    }

    pub fn has_content_for(&self, name: &str) -> bool {
        lock(&self.inner.buffers).contains(&ContentKey::from_name(Some(name)))
    }

    /// Default content for `None` (or `"content"`), otherwise the named block.
    pub fn get_content_for(&self, name: Option<&str>) -> Option<String> {
        lock(&self.inner.buffers)
            .get(&ContentKey::from_name(name))
            .map(str::to_string)
    }

    /// Names of all captured blocks, sorted.
    pub fn named_blocks(&self) -> Vec<String> {
        lock(&self.inner.buffers)
            .named_keys()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    // ── Rendering ────────────────────────────────────────────────────────

    /// Dispatch `render(partial=...)` or `render(template=...)`.
    pub fn render(&self, options: &RenderOptions) -> RenderResult<String> {
        let reference = TemplateReference::from_options(options)?;
        self.render_reference(&reference)
    }

    pub fn render_partial(&self, name: &str) -> RenderResult<String> {
        self.render_reference(&TemplateReference::partial(name))
    }

    pub fn render_template(&self, name: &str) -> RenderResult<String> {
        self.render_reference(&TemplateReference::template(name))
    }

    /// Resolve `reference` against the file currently rendering and parse the
    /// result. A missing file fails with the resolved path.
    pub fn render_reference(&self, reference: &TemplateReference) -> RenderResult<String> {
        let parser = self.parser();
        let active = parser.current_file();
        let filename = reference.resolve(active.as_deref(), parser.root());

        debug!(
            reference = reference.name(),
            partial = reference.is_partial(),
            resolved = %filename.display(),
            "Resolved template reference"
        );

        if !parser.filesystem().is_file(&filename) {
            return Err(RenderError::FileNotFound { path: filename });
        }
        self.parse_file(&filename)
    }

    // ── Failure hand-off ─────────────────────────────────────────────────

    fn record_failure(&self, err: &RenderError) {
        lock(&self.inner.failure).get_or_insert_with(|| err.clone());
    }

    pub(crate) fn take_failure(&self) -> Option<RenderError> {
        lock(&self.inner.failure).take()
    }
}

impl RenderScope for RenderContext {
    fn include(&self, options: &RenderOptions) -> RenderResult<String> {
        self.render(options).inspect_err(|err| self.record_failure(err))
    }

    fn capture(&self, name: &str, rendered: String) {
        self.set_content_for(name, rendered);
    }

    fn content(&self, name: Option<&str>) -> Option<String> {
        self.get_content_for(name)
    }

    fn has_content(&self, name: &str) -> bool {
        self.has_content_for(name)
    }

    fn active_file(&self) -> Option<PathBuf> {
        self.parser().current_file()
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("buffers", &*lock(&self.inner.buffers))
            .field("parser", &self.inner.parser)
            .finish()
    }
}
