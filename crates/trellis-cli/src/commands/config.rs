//! `trellis config`: inspect configuration values.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.raw(&format!("{value}\n"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.raw(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(config_file);
            output.raw(&format!("{}\n", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "render.root" => Ok(config
            .render
            .root
            .as_ref()
            .map(|r| r.display().to_string())
            .unwrap_or_default()),
        "render.max_depth" => Ok(config.render.max_depth.to_string()),
        "layout.extension" => Ok(config.layout.extension.clone().unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn get_known_keys() {
        let mut cfg = AppConfig::default();
        cfg.render.root = Some(PathBuf::from("/srv/site"));
        cfg.layout.extension = Some("tera".into());

        assert_eq!(get_config_value(&cfg, "render.root").unwrap(), "/srv/site");
        assert_eq!(get_config_value(&cfg, "render.max_depth").unwrap(), "32");
        assert_eq!(get_config_value(&cfg, "layout.extension").unwrap(), "tera");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn unset_values_are_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "render.root").unwrap(), "");
        assert_eq!(get_config_value(&cfg, "layout.extension").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
