//! `trellis layout`: show which layout would wrap a page.

use std::path::Path;

use serde::Serialize;

use crate::{
    cli::{LayoutArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{page_path, page_renderer, project_root};

#[derive(Serialize)]
struct LayoutReport<'a> {
    page: &'a Path,
    layout: Option<&'a Path>,
}

pub fn execute(args: LayoutArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = project_root(&config)?;
    let page = page_path(&args.file)?;
    let layout = page_renderer(&config, root).resolve_layout(&page)?;

    if output.format() == OutputFormat::Json {
        return output.json(&LayoutReport {
            page: &page,
            layout: layout.as_deref(),
        });
    }

    match layout {
        Some(layout) => output.raw(&format!("{}\n", layout.display()))?,
        None => output.info(&format!("No layout applies to {}", page.display()))?,
    }
    Ok(())
}
