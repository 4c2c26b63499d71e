//! Implementation of the `trellis list` command.

use trellis_adapters::{DiscoveredPage, LocalFilesystem, PageDiscovery, default_registry};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{display_relative, project_root};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = project_root(&config)?;
    let engines = default_registry();
    let policy = config.layout_policy();
    let pages = PageDiscovery::new(&root, &engines, &policy, &LocalFilesystem).discover()?;

    let layout_of = |page: &DiscoveredPage| {
        page.layout
            .as_deref()
            .map(|l| display_relative(l, &root))
    };

    match args.format {
        ListFormat::Table => {
            if pages.is_empty() {
                output.info(&format!("No pages found under {}", root.display()))?;
                return Ok(());
            }
            output.header(&format!("Pages under {}:", root.display()))?;
            for page in &pages {
                let layout = layout_of(page).unwrap_or_else(|| "(no layout)".into());
                output.print(&format!(
                    "  {:<40} {}",
                    page.relative,
                    output.dim(&format!("{} \u{2190} {}", page.content_type, layout))
                ))?;
            }
        }

        ListFormat::Json => output.json(&pages)?,

        ListFormat::List => {
            for page in &pages {
                output.raw(&format!("{}\n", page.relative))?;
            }
        }

        ListFormat::Csv => {
            output.raw("path,content_type,layout\n")?;
            for page in &pages {
                output.raw(&format!(
                    "{},{},{}\n",
                    page.relative,
                    page.content_type,
                    layout_of(page).unwrap_or_default()
                ))?;
            }
        }
    }

    Ok(())
}
