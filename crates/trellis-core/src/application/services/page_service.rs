//! Page Service - the handler-facing orchestrator.
//!
//! One call to [`PageRenderer::process`] is one request:
//! 1. Render the requested page into the default content slot
//! 2. Look for the nearest ancestor layout
//! 3. Render the layout with the same context, or return the page as-is

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{RenderContext, parser::Parser, ports::Filesystem, registry::EngineRegistry},
    domain::{LayoutPolicy, RenderedPage, content_type_for, find_layout_for},
    error::RenderResult,
};

/// Knobs for a [`PageRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Project root; layouts are searched up to here and `/` references
    /// resolve from here.
    pub root: PathBuf,
    pub layout_policy: LayoutPolicy,
    /// Maximum number of nested template frames per request.
    pub max_depth: usize,
}

impl RenderSettings {
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout_policy: LayoutPolicy::default(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_layout_policy(mut self, policy: LayoutPolicy) -> Self {
        self.layout_policy = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Main rendering service.
///
/// Immutable and shareable; every call builds a fresh [`RenderContext`] and
/// [`Parser`] that live only for that call.
pub struct PageRenderer {
    filesystem: Arc<dyn Filesystem>,
    engines: EngineRegistry,
    settings: RenderSettings,
}

impl PageRenderer {
    /// Create a new page renderer with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use trellis_core::application::{EngineRegistry, PageRenderer, RenderSettings};
    ///
    /// let renderer = PageRenderer::new(
    ///     filesystem, // Arc<dyn Filesystem>
    ///     engines,    // EngineRegistry
    ///     RenderSettings::new("/srv/site"),
    /// );
    /// let page = renderer.process("/srv/site/index.tera".as_ref())?;
    /// ```
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        engines: EngineRegistry,
        settings: RenderSettings,
    ) -> Self {
        Self {
            filesystem,
            engines,
            settings,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn engines(&self) -> &EngineRegistry {
        &self.engines
    }

    /// Render `requested` and wrap it in its layout, if it has one.
    #[instrument(skip_all, fields(page = %requested.display()))]
    pub fn process(&self, requested: &Path) -> RenderResult<RenderedPage> {
        let context = self.new_context();

        let rendered = context.parse_file(requested)?;
        context.append_content(&rendered);

        let layout = self.resolve_layout(requested)?;
        let body = match &layout {
            Some(layout) => {
                info!(layout = %layout.display(), "Rendering layout");
                context.parse_file(layout)?
            }
            None => {
                debug!("No layout found, returning page content");
                context.default_content()
            }
        };

        Ok(RenderedPage {
            content_type: content_type_for(requested).to_string(),
            body,
            layout,
        })
    }

    /// Render `requested` on its own, skipping layout lookup entirely.
    #[instrument(skip_all, fields(page = %requested.display()))]
    pub fn render_without_layout(&self, requested: &Path) -> RenderResult<RenderedPage> {
        let context = self.new_context();
        let body = context.parse_file(requested)?;

        Ok(RenderedPage {
            content_type: content_type_for(requested).to_string(),
            body,
            layout: None,
        })
    }

    /// Layout that [`process`](Self::process) would use for `requested`.
    pub fn resolve_layout(&self, requested: &Path) -> RenderResult<Option<PathBuf>> {
        find_layout_for(
            requested,
            &self.settings.root,
            &self.settings.layout_policy,
            |candidate| self.filesystem.is_file(candidate),
        )
    }

    fn new_context(&self) -> RenderContext {
        RenderContext::new(Parser::new(
            Arc::clone(&self.filesystem),
            self.engines.clone(),
            self.settings.root.clone(),
            self.settings.max_depth,
        ))
    }
}
