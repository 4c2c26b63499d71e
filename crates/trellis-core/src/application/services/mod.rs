//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render this page inside its layout".

pub mod page_service;

pub use page_service::{PageRenderer, RenderSettings};
