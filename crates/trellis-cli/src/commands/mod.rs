//! Command handlers, one module per subcommand.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use trellis_adapters::{LocalFilesystem, default_registry};
use trellis_core::application::PageRenderer;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod init;
pub mod layout;
pub mod list;
pub mod render;

/// Canonical project root: `render.root` (after `--root`), else the working
/// directory.
fn project_root(config: &AppConfig) -> CliResult<PathBuf> {
    let configured = match &config.render.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };

    let root = configured
        .canonicalize()
        .map_err(|_| CliError::InvalidRoot {
            path: configured.clone(),
        })?;
    if !root.is_dir() {
        return Err(CliError::InvalidRoot { path: configured });
    }

    debug!(root = %root.display(), "Resolved project root");
    Ok(root)
}

/// Canonical path of a page named on the command line.
fn page_path(file: &Path) -> CliResult<PathBuf> {
    let page = match file.canonicalize() {
        Ok(page) => page,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::PageNotFound {
                path: file.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !page.is_file() {
        return Err(CliError::PageNotFound {
            path: file.to_path_buf(),
        });
    }
    Ok(page)
}

/// Renderer over the local filesystem with every built-in dialect.
fn page_renderer(config: &AppConfig, root: PathBuf) -> PageRenderer {
    PageRenderer::new(
        Arc::new(LocalFilesystem::new()),
        default_registry(),
        config.render_settings(root),
    )
}

/// `path` relative to `root` for display, or as given when outside it.
fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
