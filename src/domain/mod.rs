//! Domain layer - Emotion model, entries and history

pub mod activities;
pub mod emotion;
pub mod entry;
pub mod history;
pub mod keywords;

pub use activities::{activities_for, activities_for_name, Activity, Difficulty};
pub use emotion::{normalize, EmotionLabel, EmotionResult, RawSentiment};
pub use entry::{encouragement, EntryText, JournalEntry};
pub use history::{History, HISTORY_CAPACITY};
pub use keywords::classify_by_keywords;
