//! `wsgen config`: show the effective settings.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `wsgen config get`.
const KNOWN_KEYS: [&str; 4] = [
    "defaults.variant",
    "defaults.root",
    "output.no_color",
    "output.format",
];

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }
        ConfigCommands::List => {
            let text = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: "settings cannot be rendered as TOML".into(),
                source: Some(Box::new(e)),
            })?;
            output.header("Effective configuration:")?;
            output.print(text.trim_end())?;
        }
        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }
    Ok(())
}

/// Resolve a dotted key against the effective settings.  Unset optional
/// keys print as an empty string.
fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(CliError::ConfigError {
            message: format!(
                "Unknown config key: '{key}' (expected one of {})",
                KNOWN_KEYS.join(", ")
            ),
            source: None,
        });
    }

    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: "settings cannot be inspected".into(),
        source: Some(Box::new(e)),
    })?;
    let pointer = format!("/{}", key.replace('.', "/"));

    Ok(match tree.pointer(&pointer) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_variant() {
        assert_eq!(lookup(&AppConfig::default(), "defaults.variant").unwrap(), "basic");
    }

    #[test]
    fn unset_root_is_empty() {
        assert_eq!(lookup(&AppConfig::default(), "defaults.root").unwrap(), "");
    }

    #[test]
    fn configured_root() {
        let mut cfg = AppConfig::default();
        cfg.defaults.root = Some(PathBuf::from("/work"));
        assert_eq!(lookup(&cfg, "defaults.root").unwrap(), "/work");
    }

    #[test]
    fn booleans_print_bare() {
        assert_eq!(lookup(&AppConfig::default(), "output.no_color").unwrap(), "false");
    }

    #[test]
    fn unknown_key_lists_known_ones() {
        let err = lookup(&AppConfig::default(), "defaults.language").unwrap_err();
        assert!(err.to_string().contains("defaults.variant"));
        assert_eq!(err.exit_code(), 4);
    }
}
