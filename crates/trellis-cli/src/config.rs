//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`RenderSettings`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--no-color`), applied by [`AppConfig::with_overrides`]
//! 2. Environment variables: `TRELLIS__<SECTION>__<KEY>`, e.g.
//!    `TRELLIS__RENDER__MAX_DEPTH=64` (a `.env` file is loaded first)
//! 3. Config file: `--config FILE` (must exist), otherwise the user config
//!    file and then `.trellis.toml` in the working directory (both optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use trellis_core::{application::RenderSettings, domain::LayoutPolicy};

use crate::cli::global::GlobalArgs;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".trellis.toml";
const ENV_PREFIX: &str = "TRELLIS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Project root; the working directory when unset.
    pub root: Option<PathBuf>,
    /// Maximum template nesting per page.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            root: None,
            max_depth: RenderSettings::DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// When set, layouts must use this dialect regardless of the page's.
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. Without
    /// it, the user and local config files are read when present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .set_default(
                "render.max_depth",
                RenderSettings::DEFAULT_MAX_DEPTH as i64,
            )
            .context("Failed to seed configuration defaults")?;

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(global) = Self::global_config_path() {
                    builder = builder.add_source(File::from(global).required(false));
                }
                builder =
                    builder.add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Apply CLI flags on top of the loaded values.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(root) = &args.root {
            self.render.root = Some(root.clone());
        }
        if args.no_color {
            self.output.no_color = true;
        }
        self
    }

    /// Layout policy selected by `layout.extension`.
    pub fn layout_policy(&self) -> LayoutPolicy {
        LayoutPolicy::from_extension(self.layout.extension.as_deref())
    }

    /// Render settings rooted at `root` (already resolved by the caller).
    pub fn render_settings(&self, root: PathBuf) -> RenderSettings {
        RenderSettings::new(root)
            .with_layout_policy(self.layout_policy())
            .with_max_depth(self.render.max_depth)
    }

    /// Per-user configuration file, if the platform has a config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "trellis", "trellis")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file configuration was (or would be) read from: `--config` if
    /// given, then `.trellis.toml` if present, then the user config file.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        if let Some(path) = config_file {
            return path.to_path_buf();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local;
        }
        Self::global_config_path().unwrap_or(local)
    }
}
