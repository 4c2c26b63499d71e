//! Tera dialect (`.tera`).

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tera::{Context, Tera, Value};
use tracing::instrument;

use trellis_core::{
    application::ports::{RenderScope, TemplateEngine},
    domain::RenderOptions,
    error::RenderResult,
};

use super::engine_error;

const DIALECT: &str = "tera";

/// Tera engine. Tera has no positional arguments, so every callback takes
/// keywords: `render(partial="nav")`, `yield_content(name="sidebar")`,
/// `has_content(name="sidebar")`, `{% filter content_for(name="x") %}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TeraEngine;

impl TeraEngine {
    pub fn new() -> Self {
        Self
    }

    fn environment(scope: &Arc<dyn RenderScope>) -> Tera {
        let mut tera = Tera::default();
        // Included markup is already rendered; escaping it again would mangle it.
        tera.autoescape_on(vec![]);

        let s = Arc::clone(scope);
        tera.register_function("render", move |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let options: RenderOptions = args
                .iter()
                .map(|(k, v)| (k.clone(), value_to_string(v)))
                .collect();
            s.include(&options)
                .map(Value::String)
                .map_err(|e| tera::Error::msg(e.to_string()))
        });

        let s = Arc::clone(scope);
        tera.register_function("yield_content", move |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let name = args.get("name").map(value_to_string);
            Ok(Value::String(s.content(name.as_deref()).unwrap_or_default()))
        });

        let s = Arc::clone(scope);
        tera.register_function("has_content", move |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let name = required_name(args, "has_content")?;
            Ok(Value::Bool(s.has_content(&name)))
        });

        let s = Arc::clone(scope);
        tera.register_filter(
            "content_for",
            move |body: &Value, args: &HashMap<String, Value>| -> tera::Result<Value> {
                let name = required_name(args, "content_for")?;
                s.capture(&name, value_to_string(body));
                Ok(Value::String(String::new()))
            },
        );

        tera
    }
}

impl TemplateEngine for TeraEngine {
    fn dialect(&self) -> &str {
        DIALECT
    }

    #[instrument(skip_all, fields(dialect = DIALECT, path = %path.display()))]
    fn render(
        &self,
        source: &str,
        path: &Path,
        scope: Arc<dyn RenderScope>,
    ) -> RenderResult<String> {
        let name = path.to_string_lossy();
        let mut tera = Self::environment(&scope);

        tera.add_raw_template(&name, source)
            .map_err(|e| engine_error(DIALECT, path, &e))?;
        tera.render(&name, &Context::new())
            .map_err(|e| engine_error(DIALECT, path, &e))
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn required_name(args: &HashMap<String, Value>, callee: &str) -> tera::Result<String> {
    args.get("name")
        .map(value_to_string)
        .ok_or_else(|| tera::Error::msg(format!("{callee} requires a `name` argument")))
}
