//! Application layer for Trellis.
//!
//! This layer contains:
//! - **Context / Parser**: the per-request render state and the recursive
//!   parse protocol
//! - **Services**: Use case orchestration (`PageRenderer`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Registry**: extension-to-engine mapping

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod context;
pub mod parser;
pub mod ports;
pub mod registry;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RenderContext;
pub use parser::Parser;
pub use registry::EngineRegistry;
pub use services::{PageRenderer, RenderSettings};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, RenderScope, TemplateEngine};

/// Lock request state. A panic mid-render leaves buffers that are still
/// structurally valid, so a poisoned lock is recovered rather than propagated.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
