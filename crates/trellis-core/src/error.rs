//! Unified error handling for Trellis Core.
//!
//! Every failure in the render pipeline is fatal for the request: nothing is
//! retried or recovered internally, the error travels up to the caller which
//! turns it into a user-visible response.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a page, its partials, or its layout.
///
/// All errors are:
/// - Cloneable (a nested failure is re-surfaced through engine wrappers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A template file could not be read.
    #[error("Failed to read {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// No engine is registered for the file's extension.
    #[error("Unsupported template type '{extension}' for {path}")]
    UnsupportedTemplateType { path: PathBuf, extension: String },

    /// A referenced template or partial does not exist. Carries the resolved
    /// path, not the name the template asked for.
    #[error("Template file does not exist: {path}")]
    FileNotFound { path: PathBuf },

    /// A `render(...)` call had neither, both, or unknown option keys.
    #[error("Render options not supported: {options}")]
    UnsupportedOptions { options: String },

    /// Layout search was asked about a file outside the project root.
    #[error("{path} is outside the project root {root}")]
    PathOutsideRoot { path: PathBuf, root: PathBuf },

    /// Template inclusion nested deeper than the configured limit.
    #[error("Template nesting exceeded {limit} levels at {path}")]
    RecursionLimit { limit: usize, path: PathBuf },

    /// The dialect engine rejected or failed to evaluate a template.
    #[error("Template engine '{dialect}' failed on {path}: {reason}")]
    Engine {
        dialect: String,
        path: PathBuf,
        reason: String,
    },
}

impl RenderError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::UnsupportedTemplateType { extension, .. } => vec![
                format!("No template engine handles '.{}' files", extension),
                "Supported dialects: .tera (Tera), .j2 (MiniJinja)".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("Expected a template at: {}", path.display()),
                "Partials are looked up with a leading '_' on the file name".into(),
                "Names without an extension inherit the calling template's extension".into(),
                "A leading '/' resolves from the project root".into(),
            ],
            Self::UnsupportedOptions { .. } => vec![
                "Pass exactly one of: render(partial=\"name\") or render(template=\"name\")".into(),
            ],
            Self::PathOutsideRoot { root, .. } => vec![
                format!("Only files under {} can be rendered", root.display()),
                "Pass --root to point at the directory containing the page".into(),
            ],
            Self::RecursionLimit { limit, .. } => vec![
                format!("Templates nest more than {} levels deep", limit),
                "Check for a partial that includes itself, directly or indirectly".into(),
                "Raise render.max_depth if the nesting is intentional".into(),
            ],
            Self::Engine { dialect, .. } => vec![
                format!("Check the {} syntax of the template", dialect),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::Io { .. } => ErrorCategory::Internal,
            Self::UnsupportedTemplateType { .. }
            | Self::UnsupportedOptions { .. }
            | Self::PathOutsideRoot { .. }
            | Self::RecursionLimit { .. }
            | Self::Engine { .. } => ErrorCategory::Validation,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_reports_resolved_path() {
        let err = RenderError::FileNotFound {
            path: PathBuf::from("/site/a/_widget.tera"),
        };
        assert_eq!(
            err.to_string(),
            "Template file does not exist: /site/a/_widget.tera"
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn recursion_limit_suggests_max_depth() {
        let err = RenderError::RecursionLimit {
            limit: 4,
            path: PathBuf::from("/site/_loop.tera"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("max_depth")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn io_is_internal() {
        let err = RenderError::Io {
            path: PathBuf::from("/x"),
            reason: "denied".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
