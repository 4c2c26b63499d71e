//! The Parser: engine selection and the current-file stack discipline.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{instrument, trace};

use crate::application::{
    RenderContext, lock,
    ports::{Filesystem, RenderScope},
    registry::EngineRegistry,
};
use crate::error::{RenderError, RenderResult};

/// Parse-frame state. Only one slot is kept; each `parse_file` call holds the
/// previous value in a local and puts it back on the way out.
#[derive(Debug, Default, Clone)]
struct Frame {
    current_file: Option<PathBuf>,
    depth: usize,
}

/// Renders individual template files for one request.
///
/// The parser tracks which file is mid-render so that references made from
/// inside a template resolve relative to that file, however deeply nested.
pub struct Parser {
    filesystem: Arc<dyn Filesystem>,
    engines: EngineRegistry,
    root: PathBuf,
    max_depth: usize,
    frame: Mutex<Frame>,
}

impl Parser {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        engines: EngineRegistry,
        root: impl Into<PathBuf>,
        max_depth: usize,
    ) -> Self {
        Self {
            filesystem,
            engines,
            root: root.into(),
            max_depth,
            frame: Mutex::new(Frame::default()),
        }
    }

    /// Project root that `/`-prefixed references resolve from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    /// The innermost file currently rendering, if any.
    pub fn current_file(&self) -> Option<PathBuf> {
        lock(&self.frame).current_file.clone()
    }

    /// Number of parse frames currently active.
    pub fn depth(&self) -> usize {
        lock(&self.frame).depth
    }

    /// Render `filename` with the engine for its extension.
    ///
    /// While the engine runs, [`current_file`](Self::current_file) reports
    /// `filename`; afterwards it reports whatever it did before the call,
    /// whether the render succeeded or not.
    #[instrument(skip_all, fields(file = %filename.display()))]
    pub fn parse_file(&self, context: &RenderContext, filename: &Path) -> RenderResult<String> {
        let saved = self.enter(filename)?;
        let result = self.render_file(context, filename);
        self.leave(saved);
        result
    }

    fn enter(&self, filename: &Path) -> RenderResult<Frame> {
        let mut frame = lock(&self.frame);
        if frame.depth >= self.max_depth {
            return Err(RenderError::RecursionLimit {
                limit: self.max_depth,
                path: filename.to_path_buf(),
            });
        }

        let saved = frame.clone();
        frame.current_file = Some(filename.to_path_buf());
        frame.depth += 1;
        trace!(depth = frame.depth, "Entered template frame");
        Ok(saved)
    }

    fn leave(&self, saved: Frame) {
        trace!(depth = saved.depth, "Leaving template frame");
        *lock(&self.frame) = saved;
    }

    fn render_file(&self, context: &RenderContext, filename: &Path) -> RenderResult<String> {
        let source = self.filesystem.read_to_string(filename)?;
        let engine = self.engines.for_path(filename)?;

        let scope: Arc<dyn RenderScope> = Arc::new(context.clone());
        match engine.render(&source, filename, scope) {
            Ok(rendered) => {
                // A failure an engine swallowed must not leak into a later frame.
                context.take_failure();
                Ok(rendered)
            }
            Err(err) => Err(context.take_failure().unwrap_or(err)),
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("engines", &self.engines)
            .field("root", &self.root)
            .field("max_depth", &self.max_depth)
            .field("frame", &*lock(&self.frame))
            .finish()
    }
}
