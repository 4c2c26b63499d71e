//! In-crate test doubles: a map-backed filesystem and a line-directive
//! template dialect (`.st`) that exercises every scope callback.
//!
//! Each line of a `.st` template renders on its own and the results are
//! concatenated without separators:
//!
//! | Line                  | Output                                   |
//! |-----------------------|------------------------------------------|
//! | `@partial NAME`       | `render(partial=NAME)`                   |
//! | `@template NAME`      | `render(template=NAME)`                  |
//! | `@render k=v k=v`     | `render` with raw options                |
//! | `@yield` / `@yield N` | default content / block `N` (or empty)   |
//! | `@capture N TEXT`     | stores TEXT under `N`, outputs nothing   |
//! | `@has N`              | `true` / `false`                         |
//! | `@file`               | the active file path                     |
//! | anything else         | the line itself                          |

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{
    Parser, RenderContext,
    ports::{Filesystem, RenderScope, TemplateEngine},
    registry::EngineRegistry,
};
use crate::domain::RenderOptions;
use crate::error::{RenderError, RenderResult};

#[derive(Debug, Default)]
pub(crate) struct MapFilesystem {
    files: HashMap<PathBuf, String>,
}

impl MapFilesystem {
    pub(crate) fn with_files(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, body)| (PathBuf::from(path), body.to_string()))
                .collect(),
        }
    }
}

impl Filesystem for MapFilesystem {
    fn read_to_string(&self, path: &Path) -> RenderResult<String> {
        self.files.get(path).cloned().ok_or_else(|| RenderError::Io {
            path: path.to_path_buf(),
            reason: "No such file".into(),
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

pub(crate) struct ScriptEngine;

impl TemplateEngine for ScriptEngine {
    fn dialect(&self) -> &str {
        "script"
    }

    fn render(
        &self,
        source: &str,
        _path: &Path,
        scope: Arc<dyn RenderScope>,
    ) -> RenderResult<String> {
        let mut out = String::new();
        for line in source.lines() {
            out.push_str(&render_line(line, scope.as_ref())?);
        }
        Ok(out)
    }
}

fn render_line(line: &str, scope: &dyn RenderScope) -> RenderResult<String> {
    let (directive, rest) = line.split_once(' ').unwrap_or((line, ""));
    let single = |key: &str| -> RenderOptions {
        RenderOptions::from([(key.to_string(), rest.to_string())])
    };

    match directive {
        "@partial" => scope.include(&single("partial")),
        "@template" => scope.include(&single("template")),
        "@render" => {
            let options = rest
                .split_whitespace()
                .filter_map(|pair| pair.split_once('='))
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            scope.include(&options)
        }
        "@yield" => {
            let name = (!rest.is_empty()).then_some(rest);
            Ok(scope.content(name).unwrap_or_default())
        }
        "@capture" => {
            let (name, text) = rest.split_once(' ').unwrap_or((rest, ""));
            scope.capture(name, text.to_string());
            Ok(String::new())
        }
        "@has" => Ok(scope.has_content(rest).to_string()),
        "@file" => Ok(scope
            .active_file()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        _ => Ok(line.to_string()),
    }
}

/// Registry with the script dialect under `.st`.
pub(crate) fn script_registry() -> EngineRegistry {
    EngineRegistry::new().with("st", Arc::new(ScriptEngine))
}

/// Fresh context rooted at `/site` over `files`, with the script dialect and
/// a nesting limit of `max_depth`.
pub(crate) fn script_context(files: &[(&str, &str)], max_depth: usize) -> RenderContext {
    RenderContext::new(Parser::new(
        Arc::new(MapFilesystem::with_files(files)),
        script_registry(),
        "/site",
        max_depth,
    ))
}
