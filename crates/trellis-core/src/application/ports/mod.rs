//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `trellis-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Template file access
//!   - `TemplateEngine`: One template dialect
//!
//! - **Callback Port**: Handed to engines, implemented by the application
//!   - `RenderScope`: Includes and content capture from inside a template

pub mod output;

pub use output::{Filesystem, RenderScope, TemplateEngine};

#[cfg(test)]
pub use output::MockFilesystem;
