//! Configuration module for the `intouch` CLI.
//!
//! Credentials are resolved per field: TOML file first, then the `INTOUCH_*`
//! environment variables.

pub mod file;

use crate::config::file::FileConfig;
use intouch_sdk::PartialCredentials;
use intouch_sdk::client::{Intouch, IntouchBuilder};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Client(#[from] intouch_sdk::ConfigError),
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Without a path, only the environment and SDK defaults apply.
    pub fn new(config_path: Option<impl AsRef<Path>>) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
        }
    }

    pub fn load(&self) -> Result<FileConfig, ConfigError> {
        let Some(path) = &self.config_path else {
            return Ok(FileConfig::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.clone(),
            source,
        })?;
        let config: FileConfig = toml::from_str(&content)?;
        validate(&config)?;
        tracing::info!("Configuration loaded from {:?}", path);
        Ok(config)
    }

    /// Load the file and build a client, with `env` as the fallback source.
    pub fn client(&self, env: PartialCredentials) -> Result<Intouch, ConfigError> {
        let config = self.load()?;
        Ok(builder(config, env).build()?)
    }
}

fn validate(config: &FileConfig) -> Result<(), ConfigError> {
    if config.gateway.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "gateway.timeout_secs must be greater than 0".into(),
        ));
    }
    Ok(())
}

fn builder(config: FileConfig, env: PartialCredentials) -> IntouchBuilder {
    Intouch::builder()
        .params(config.credentials)
        .defaults(env)
        .urls(config.gateway.urls)
        .auth_scheme(config.gateway.auth)
        .timeout(Duration::from_secs(config.gateway.timeout_secs))
}
