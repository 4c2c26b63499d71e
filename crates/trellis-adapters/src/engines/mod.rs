//! Template dialect adapters.
//!
//! Each engine builds a fresh environment per render and wires the
//! [`RenderScope`](trellis_core::application::ports::RenderScope) callbacks
//! into it as template functions and filters:
//!
//! | Name            | Kind            | Behaviour                                |
//! |-----------------|-----------------|------------------------------------------|
//! | `render`        | function        | include a partial or template            |
//! | `content_for`   | filter section  | capture the section body under a name    |
//! | `yield_content` | function        | default content, or a named block        |
//! | `has_content`   | function        | whether a named block was captured       |

mod jinja;
mod tera;

use std::error::Error as StdError;
use std::path::Path;
use std::sync::Arc;

use trellis_core::{application::EngineRegistry, error::RenderError};

pub use self::jinja::JinjaEngine;
pub use self::tera::TeraEngine;

/// Extension handled by [`TeraEngine`].
pub const TERA_EXTENSION: &str = "tera";
/// Extension handled by [`JinjaEngine`].
pub const JINJA_EXTENSION: &str = "j2";

/// Registry with every built-in dialect.
pub fn default_registry() -> EngineRegistry {
    EngineRegistry::new()
        .with(TERA_EXTENSION, Arc::new(TeraEngine::new()))
        .with(JINJA_EXTENSION, Arc::new(JinjaEngine::new()))
}

/// Flatten an engine error and its sources into one line.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if parts.last() != Some(&message) {
            parts.push(message);
        }
        source = cause.source();
    }
    parts.join(": ")
}

fn engine_error(dialect: &str, path: &Path, err: &(dyn StdError + 'static)) -> RenderError {
    RenderError::Engine {
        dialect: dialect.to_string(),
        path: path.to_path_buf(),
        reason: describe(err),
    }
}
