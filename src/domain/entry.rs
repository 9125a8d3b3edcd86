//! Journal entries and the rules for text a child may submit

use crate::domain::emotion::EmotionResult;
use crate::error::{JieleweError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_ENTRY_CHARS: usize = 10;
pub const MAX_ENTRY_CHARS: usize = 500;

/// One saved journal submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    pub emotion: EmotionResult,
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// Create an entry stamped with the given instant.
    /// The id is the instant in epoch milliseconds.
    pub fn new(content: String, emotion: EmotionResult, timestamp: DateTime<Utc>) -> Self {
        JournalEntry {
            id: timestamp.timestamp_millis().to_string(),
            content,
            emotion,
            timestamp,
        }
    }
}

/// Text that passed the journal form's length checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryText(String);

impl EntryText {
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(JieleweError::InvalidEntry(
                "Entry is empty. Tell me how you're feeling!".to_string(),
            ));
        }

        let chars = text.chars().count();
        if chars < MIN_ENTRY_CHARS {
            return Err(JieleweError::InvalidEntry(format!(
                "Entry is too short ({} characters, need at least {})",
                chars, MIN_ENTRY_CHARS
            )));
        }
        if chars > MAX_ENTRY_CHARS {
            return Err(JieleweError::InvalidEntry(format!(
                "Entry is too long ({} characters, at most {})",
                chars, MAX_ENTRY_CHARS
            )));
        }

        Ok(EntryText(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Friendly nudge shown while a child is typing
pub fn encouragement(char_count: usize) -> &'static str {
    match char_count {
        0 => "Tell me how you're feeling today! 😊",
        n if n < MIN_ENTRY_CHARS => "Keep going! A few more words would be great! ✨",
        n if n < 50 => "Awesome start! Tell me more! 🌟",
        _ => "Perfect! You're doing great! 💚",
    }
}
