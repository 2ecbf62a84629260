//! # Configuration Loader
//!
//! `load_config` is pure data loading: read the TOML file and map it into
//! the `AppConfig` DTO, accepting whatever is in the file.
//! `resolve_config` then applies the process-level policy: which file to read,
//! the environment override and built-in defaults for empty values.

use anyhow::Context;
use std::path::{Path, PathBuf};

use ink_core::config::AppConfig;

/// Server used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://192.168.1.5:5000";

pub const DEFAULT_BACKGROUND_PARAM: &str = "dark";

/// Overrides `[server] url` from the config file.
pub const SERVER_URL_ENV: &str = "INKARTA_SERVER_URL";

/// `<config_dir>/inkarta/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inkarta").join("config.toml"))
}

/// Load configuration from a TOML file
///
/// **NO validation is performed**: empty strings and zero sizes are passed
/// through as they are.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Resolves the effective configuration.
///
/// An explicit path must exist. The default path is optional; when it is
/// absent the built-in defaults are used.
pub fn resolve_config(explicit_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut config = match explicit_path {
        Some(path) => load_config(path)?,
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => load_config(&path)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                AppConfig::default()
            }
        },
    };

    if let Ok(url) = std::env::var(SERVER_URL_ENV) {
        if !url.trim().is_empty() {
            config.server_url = url;
        }
    }

    Ok(apply_defaults(config))
}

fn apply_defaults(mut config: AppConfig) -> AppConfig {
    if config.server_url.trim().is_empty() {
        config.server_url = DEFAULT_SERVER_URL.to_string();
    }
    if config.background_param.trim().is_empty() {
        config.background_param = DEFAULT_BACKGROUND_PARAM.to_string();
    }
    config
}
