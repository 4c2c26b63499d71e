//! Core domain layer for Trellis.
//!
//! Pure rules with no I/O: how references map onto files, which extension
//! selects which dialect, where layouts are searched for, and how captured
//! content is stored. Filesystem access and template evaluation are reached
//! through the ports in `crate::application::ports`.

pub mod content;
pub mod dialect;
pub mod layout;
pub mod page;
pub mod reference;

pub use content::{ContentBuffers, ContentKey, DEFAULT_CONTENT_KEY};
pub use dialect::{dialect_extension, format_extension, has_explicit_extension, inherited_extension};
pub use layout::{LAYOUT_STEM, LayoutPolicy, find_layout_for};
pub use page::{DEFAULT_CONTENT_TYPE, RenderedPage, content_type_for};
pub use reference::{RenderOptions, TemplateReference};
