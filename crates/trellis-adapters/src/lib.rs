//! Infrastructure adapters for Trellis.
//!
//! This crate implements the ports defined in `trellis-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod discovery;
pub mod engines;
pub mod filesystem;

// Re-export commonly used adapters
pub use discovery::{DiscoveredPage, PageDiscovery};
pub use engines::{JinjaEngine, TeraEngine, default_registry};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
