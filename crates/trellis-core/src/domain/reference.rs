//! Template references made from inside a render, and how they map onto
//! files on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::dialect::{has_explicit_extension, inherited_extension};
use crate::error::{RenderError, RenderResult};

/// Keyword options a template passes to `render(...)`.
pub type RenderOptions = BTreeMap<String, String>;

const PARTIAL_KEY: &str = "partial";
const TEMPLATE_KEY: &str = "template";

/// A request for another template, either a partial (`_`-prefixed file) or a
/// plain template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReference {
    name: String,
    partial: bool,
}

impl TemplateReference {
    pub fn partial(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partial: true,
        }
    }

    pub fn template(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partial: false,
        }
    }

    /// Interpret render options. Exactly one of `partial` or `template` must
    /// be present and no other key is accepted.
    pub fn from_options(options: &RenderOptions) -> RenderResult<Self> {
        let unsupported = || RenderError::UnsupportedOptions {
            options: format!("{options:?}"),
        };

        if options.len() != 1 {
            return Err(unsupported());
        }

        match options.iter().next() {
            Some((key, name)) if key == PARTIAL_KEY => Ok(Self::partial(name.as_str())),
            Some((key, name)) if key == TEMPLATE_KEY => Ok(Self::template(name.as_str())),
            _ => Err(unsupported()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// A leading `/` anchors the name at the project root.
    pub fn is_root_relative(&self) -> bool {
        self.name.starts_with('/')
    }

    /// Compute the file this reference points at.
    ///
    /// Relative names resolve against the directory of `active_file` (the file
    /// currently rendering), root-relative names against `root`. Partials get a
    /// `_` prefix on the final segment, and a name without its own extension
    /// inherits the extension of `active_file`.
    pub fn resolve(&self, active_file: Option<&Path>, root: &Path) -> PathBuf {
        let (base, name) = match self.name.strip_prefix('/') {
            Some(rest) => (root, rest),
            None => (
                active_file.and_then(Path::parent).unwrap_or(root),
                self.name.as_str(),
            ),
        };

        let joined = base.join(name);
        let mut file_name = joined
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.partial {
            file_name.insert(0, '_');
        }
        if !has_explicit_extension(name) {
            if let Some(active) = active_file {
                file_name.push_str(&inherited_extension(active));
            }
        }

        joined.with_file_name(file_name)
    }
}
