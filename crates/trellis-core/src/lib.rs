//! Trellis Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Trellis, a
//! render-and-compose layer that turns a page template into a full response
//! body: the page renders first, partials and templates it references render
//! relative to it, named blocks it captures become visible to the nearest
//! ancestor layout, and the layout renders last around the page output.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           trellis-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (PageRenderer, RenderContext, Parser)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateEngine, RenderScope)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     trellis-adapters (Infrastructure)   │
//! │ (LocalFilesystem, TeraEngine, Jinja...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateReference, LayoutPolicy, ...)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trellis_core::prelude::*;
//!
//! // Adapters come from trellis-adapters (or your own port implementations)
//! let renderer = PageRenderer::new(
//!     Arc::new(filesystem),
//!     engines,
//!     RenderSettings::new("/srv/site"),
//! );
//!
//! let page = renderer.process("/srv/site/blog/post.html.tera".as_ref())?;
//! println!("{} ({} bytes)", page.content_type, page.body.len());
//! ```

// Domain layer (pure rules)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EngineRegistry, PageRenderer, Parser, RenderContext, RenderSettings,
        ports::{Filesystem, RenderScope, TemplateEngine},
    };
    pub use crate::domain::{
        ContentKey, LayoutPolicy, RenderOptions, RenderedPage, TemplateReference,
    };
    pub use crate::error::{ErrorCategory, RenderError, RenderResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
