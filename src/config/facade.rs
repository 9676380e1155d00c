//! Config loading facade over the layered sources.

use crate::config::{parse_endpoint_list, SlateConfig};
use crate::error::ClientError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Comma-separated controller endpoint list, overriding the config file.
pub const ENV_CONTROLLERS: &str = "SLATE_CONTROLLERS";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the layered configuration: defaults, global file, environment.
    pub fn load() -> Result<SlateConfig, ClientError> {
        let mut builder = Config::builder();
        builder = Self::add_global_file(builder);
        builder = builder.add_source(Environment::with_prefix("SLATE").separator("__"));
        let mut config: SlateConfig = builder.build()?.try_deserialize()?;
        Self::apply_endpoint_env(&mut config);
        Ok(config)
    }

    /// Load an explicit config file in place of the global file layer.
    /// Environment overrides still apply on top.
    pub fn load_from_file(path: &Path) -> Result<SlateConfig, ClientError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;
        let mut config: SlateConfig = toml::from_str(&raw).map_err(|e| {
            ClientError::Config(format!("invalid config file {}: {}", path.display(), e))
        })?;
        Self::apply_endpoint_env(&mut config);
        Ok(config)
    }

    /// Path to the global config file.
    /// Uses `$XDG_CONFIG_HOME/slate/config.toml` when set, otherwise
    /// `~/.config/slate/config.toml`.
    pub fn global_config_path() -> Option<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                return Some(PathBuf::from(xdg).join("slate").join("config.toml"));
            }
        }
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("slate")
                .join("config.toml")
        })
    }

    fn add_global_file(mut builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            } else {
                debug!(config_path = %path.display(), "global config file not found, using defaults");
            }
        }
        builder
    }

    fn apply_endpoint_env(config: &mut SlateConfig) {
        if let Ok(raw) = std::env::var(ENV_CONTROLLERS) {
            let endpoints = parse_endpoint_list(&raw);
            if !endpoints.is_empty() {
                config.controller.endpoints = endpoints;
            }
        }
    }
}
