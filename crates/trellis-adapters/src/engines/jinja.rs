//! MiniJinja dialect (`.j2`).

use std::path::Path;
use std::sync::Arc;

use minijinja::{AutoEscape, Environment, Error, ErrorKind, Value, context, value::Kwargs};
use tracing::instrument;

use trellis_core::{
    application::ports::{RenderScope, TemplateEngine},
    domain::RenderOptions,
    error::RenderResult,
};

use super::engine_error;

const DIALECT: &str = "minijinja";

/// MiniJinja engine.
///
/// `render` takes keywords (`render(partial="nav")`); the content callbacks
/// take the block name positionally: `yield_content("sidebar")`,
/// `has_content("sidebar")`, `{% filter content_for("x") %}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JinjaEngine;

impl JinjaEngine {
    pub fn new() -> Self {
        Self
    }

    fn environment(scope: &Arc<dyn RenderScope>) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);

        let s = Arc::clone(scope);
        env.add_function("render", move |kwargs: Kwargs| -> Result<Value, Error> {
            let keys: Vec<String> = kwargs.args().map(str::to_string).collect();
            let mut options = RenderOptions::new();
            for key in keys {
                let value: Value = kwargs.get(&key)?;
                options.insert(key, value_to_string(&value));
            }
            s.include(&options)
                .map(Value::from_safe_string)
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
        });

        let s = Arc::clone(scope);
        env.add_function("yield_content", move |name: Option<String>| -> Value {
            Value::from_safe_string(s.content(name.as_deref()).unwrap_or_default())
        });

        let s = Arc::clone(scope);
        env.add_function("has_content", move |name: String| -> bool {
            s.has_content(&name)
        });

        let s = Arc::clone(scope);
        env.add_filter("content_for", move |body: String, name: String| -> String {
            s.capture(&name, body);
            String::new()
        });

        env
    }
}

impl TemplateEngine for JinjaEngine {
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
        let env = Self::environment(&scope);
        env.render_named_str(&path.to_string_lossy(), source, context! {})
            .map_err(|e| engine_error(DIALECT, path, &e))
    }
}

fn value_to_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
