use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::AttributionResult;

/// Environment prefix for configuration overrides, e.g.
/// `CHANNEL_ATTRIBUTION__BATCH__STRICT=true`.
pub const ENV_PREFIX: &str = "CHANNEL_ATTRIBUTION";

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `CHANNEL_ATTRIBUTION__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Abort on the first malformed record instead of skipping it.
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// Include the decision branch and matched category in each output record.
    #[serde(default = "default_explain")]
    pub explain: bool,
}

// Default functions
fn default_log_format() -> LogFormat {
    LogFormat::Json
}
fn default_log_filter() -> String {
    "channel_attribution=info,attribution_classifier=info".to_string()
}
fn default_strict() -> bool {
    false
}
fn default_explain() -> bool {
    false
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            filter: default_log_filter(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            explain: default_explain(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then environment
    /// variables. Environment values win.
    pub fn load(path: Option<&Path>) -> AttributionResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
