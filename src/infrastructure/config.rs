//! Configuration management

use crate::error::{JieleweError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const JOURNAL_DIR: &str = ".jielewe";
pub const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_MODEL: &str = "distilbert/distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/hf-inference/models";
/// Upper bound on extra backend attempts before the keyword fallback
pub const MAX_RETRIES: u32 = 10;

/// Which sentiment backend classifies entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Hosted transformer model reached over HTTP
    #[default]
    Huggingface,
    /// Offline word-count heuristic
    Keyword,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Huggingface => f.write_str("huggingface"),
            BackendKind::Keyword => f.write_str("keyword"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(BackendKind::Huggingface),
            "keyword" | "keywords" => Ok(BackendKind::Keyword),
            _ => Err(format!(
                "Invalid backend: '{}'. Valid backends are: huggingface, keyword",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    pub created: DateTime<Utc>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_delay_ms() -> u64 {
    500
}

impl Config {
    /// Create a new config with default values
    pub fn new(backend: BackendKind) -> Self {
        Config {
            backend,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            retries: 0,
            retry_delay_ms: default_retry_delay_ms(),
            created: Utc::now(),
        }
    }

    /// Load config from .jielewe/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JieleweError::NotJieleweDirectory(path.to_path_buf())
            } else {
                JieleweError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| JieleweError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .jielewe/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join(CONFIG_FILE);

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JieleweError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// API token for the hosted model, taken from the environment only
    pub fn api_token(&self) -> Option<String> {
        std::env::var("HF_TOKEN")
            .or_else(|_| std::env::var("HUGGINGFACE_TOKEN"))
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Full URL of the configured model
    pub fn model_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.model.trim_start_matches('/')
        )
    }
}
