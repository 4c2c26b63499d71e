//! `trellis render`: render a page, wrapped in its layout.

use tracing::{info, instrument};

use crate::{
    cli::{RenderArgs, RenderFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

use super::{display_relative, page_path, page_renderer, project_root};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = project_root(&config)?;
    let page = page_path(&args.file)?;
    let renderer = page_renderer(&config, root.clone());

    let rendered = if args.no_layout {
        renderer.render_without_layout(&page)?
    } else {
        renderer.process(&page)?
    };

    info!(
        content_type = %rendered.content_type,
        bytes = rendered.body.len(),
        layout = ?rendered.layout.as_ref().map(|l| display_relative(l, &root)),
        "Rendered page"
    );

    let text = match args.format {
        RenderFormat::Body if args.headers => format!(
            "Content-Type: {}\n\n{}",
            rendered.content_type, rendered.body
        ),
        RenderFormat::Body => rendered.body,
        RenderFormat::Json => {
            let mut json = serde_json::to_string_pretty(&rendered)?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
            output.success(&format!(
                "Wrote {} ({} bytes)",
                path.display(),
                text.len()
            ))?;
        }
        None => output.raw(&text)?,
    }

    Ok(())
}
