//! Error types for jielewe

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jielewe application
#[derive(Debug, Error)]
pub enum JieleweError {
    #[error("Not a jielewe journal: {0}")]
    NotJieleweDirectory(PathBuf),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sentiment backend error: {0}")]
    Backend(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JieleweError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JieleweError::NotJieleweDirectory(_) => 2,
            JieleweError::InvalidEntry(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JieleweError::NotJieleweDirectory(path) => {
                format!(
                    "Not a jielewe journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'jielewe init' in this directory to start a journal\n\
                    • Navigate to an existing journal directory\n\
                    • Set JIELEWE_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JieleweError::InvalidEntry(msg) => {
                format!(
                    "{}\n\n\
                    Entries must be between 10 and 500 characters.\n\
                    Example: jielewe analyze \"Today I played outside and it was fun\"",
                    msg
                )
            }
            JieleweError::Config(msg) => {
                if msg.contains("Invalid backend") {
                    format!(
                        "{}\n\n\
                        Valid backends: huggingface, keyword\n\
                        Example: jielewe config backend keyword",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JieleweError
pub type Result<T> = std::result::Result<T, JieleweError>;
