//! The handler-facing result of a render.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::dialect::format_extension;

/// Content type used when a page carries no output-format extension.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// A fully composed page: body plus the metadata a handler needs to answer
/// the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub content_type: String,
    pub body: String,
    /// Layout that wrapped the page, if one was found.
    pub layout: Option<PathBuf>,
}

/// Content type of the rendered form of `path`, judged by the extension in
/// front of the dialect extension (`feed.xml.tera` is XML).
pub fn content_type_for(path: &Path) -> &'static str {
    match format_extension(path).as_deref() {
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("rss") => "application/rss+xml",
        Some("svg") => "image/svg+xml",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_dialect_renders_as_html() {
        assert_eq!(content_type_for(Path::new("/s/index.tera")), "text/html");
    }

    #[test]
    fn format_extension_drives_content_type() {
        assert_eq!(content_type_for(Path::new("/s/site.css.tera")), "text/css");
        assert_eq!(content_type_for(Path::new("/s/feed.xml.j2")), "application/xml");
        assert_eq!(content_type_for(Path::new("/s/notes.txt.j2")), "text/plain");
    }

    #[test]
    fn unknown_format_falls_back() {
        assert_eq!(content_type_for(Path::new("/s/data.bin.tera")), DEFAULT_CONTENT_TYPE);
    }
}
