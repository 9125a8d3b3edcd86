//! Config management use case

use crate::error::{JieleweError, Result};
use crate::infrastructure::config::MAX_RETRIES;
use crate::infrastructure::{BackendKind, Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;

pub const CONFIG_KEYS: &str = "backend, model, endpoint, timeout_secs, retries, retry_delay_ms, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "backend" => Ok(config.backend.to_string()),
            "model" => Ok(config.model),
            "endpoint" => Ok(config.endpoint),
            "timeout_secs" => Ok(config.timeout_secs.to_string()),
            "retries" => Ok(config.retries.to_string()),
            "retry_delay_ms" => Ok(config.retry_delay_ms.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JieleweError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "backend" => {
                config.backend = BackendKind::from_str(value).map_err(JieleweError::Config)?;
            }
            "model" => {
                if value.trim().is_empty() {
                    return Err(JieleweError::Config("Model cannot be empty".to_string()));
                }
                config.model = value.trim().to_string();
            }
            "endpoint" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(JieleweError::Config(format!(
                        "Invalid endpoint: '{}'. Expected an http:// or https:// URL",
                        value
                    )));
                }
                config.endpoint = value.to_string();
            }
            "timeout_secs" => config.timeout_secs = parse_number(key, value)?,
            "retries" => {
                let retries: u32 = parse_number(key, value)?;
                if retries > MAX_RETRIES {
                    return Err(JieleweError::Config(format!(
                        "Invalid retries: '{}'. Expected at most {}",
                        value, MAX_RETRIES
                    )));
                }
                config.retries = retries;
            }
            "retry_delay_ms" => config.retry_delay_ms = parse_number(key, value)?,
            "created" => {
                return Err(JieleweError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JieleweError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, CONFIG_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        JieleweError::Config(format!(
            "Invalid value for '{}': '{}' is not a whole number",
            key, value
        ))
    })
}
