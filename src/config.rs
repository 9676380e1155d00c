//! Client configuration: controller endpoints, output defaults, logging.
//!
//! Settings layer in fixed order: built-in defaults, the global config
//! file, then `SLATE_`-prefixed environment variables. An explicit
//! `--config` file replaces the global file layer. Command-line flags win
//! over everything and are applied by the CLI route.

mod facade;

pub use facade::{ConfigLoader, ENV_CONTROLLERS};

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Endpoint tried when nothing else is configured.
pub const DEFAULT_CONTROLLER_URL: &str = "http://localhost:3370";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlateConfig {
    #[serde(default)]
    pub controller: ControllerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Controller connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Endpoints tried in order until one answers.
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            endpoints: default_endpoints(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Interactive output defaults. Flags such as `--no-color` override these
/// per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub color: bool,

    #[serde(default = "default_true")]
    pub utf8: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: true,
            utf8: true,
        }
    }
}

fn default_endpoints() -> Vec<String> {
    vec![DEFAULT_CONTROLLER_URL.to_string()]
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

/// Parse a comma-separated endpoint list as given on `--controllers` or in
/// the environment. Empty entries are dropped.
pub fn parse_endpoint_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
