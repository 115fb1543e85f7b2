//! Configuration for the property management service

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Address to bind the HTTP listener on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Run pending migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: default_database_url(),
            run_migrations: true,
            log_filter: default_log_filter(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "info,property_service=debug".to_string()
}

/// Configuration load failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),
}

impl Config {
    /// Load configuration from defaults, an optional YAML file and
    /// PROPERTY_SERVICE_* environment variables, in increasing precedence.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed("PROPERTY_SERVICE_"))
            .extract()?;
        Ok(config)
    }
}
