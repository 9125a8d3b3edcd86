//! Bounded, newest-first entry history

use crate::domain::entry::JournalEntry;

/// Maximum number of entries kept
pub const HISTORY_CAPACITY: usize = 50;

/// Ordered journal entries, newest first, never longer than its capacity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    entries: Vec<JournalEntry>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Build from stored entries, keeping only the newest `HISTORY_CAPACITY`.
    /// Stored order is trusted to already be newest first.
    pub fn from_entries(mut entries: Vec<JournalEntry>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        History { entries }
    }

    /// Copy of this history with `entry` at the front and the oldest entries
    /// dropped past capacity. Returns the new history and how many were evicted.
    pub fn with_newest(&self, entry: JournalEntry) -> (History, usize) {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());

        let evicted = entries.len().saturating_sub(HISTORY_CAPACITY);
        entries.truncate(HISTORY_CAPACITY);
        (History { entries }, evicted)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn newest(&self) -> Option<&JournalEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::{EmotionLabel, EmotionResult};
    use chrono::{Duration, TimeZone, Utc};

    fn entry(n: i64) -> JournalEntry {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(n);
        JournalEntry::new(
            format!("entry number {}", n),
            EmotionResult::new(EmotionLabel::Neutral, 0.6),
            ts,
        )
    }

    #[test]
    fn test_newest_goes_first() {
        let (history, evicted) = History::new().with_newest(entry(1));
        let (history, _) = history.with_newest(entry(2));
        assert_eq!(evicted, 0);
        assert_eq!(history.len(), 2);
        assert_eq!(history.newest().unwrap().content, "entry number 2");
        assert_eq!(history.entries()[1].content, "entry number 1");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new();
        let mut total_evicted = 0;
        for n in 0..51 {
            let (next, evicted) = history.with_newest(entry(n));
            history = next;
            total_evicted += evicted;
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(total_evicted, 1);
        assert_eq!(history.newest().unwrap().content, "entry number 50");
        assert_eq!(history.entries()[49].content, "entry number 1");
        assert!(history
            .entries()
            .iter()
            .all(|e| e.content != "entry number 0"));
    }

    #[test]
    fn test_with_newest_leaves_original_untouched() {
        let (history, _) = History::new().with_newest(entry(1));
        let _ = history.with_newest(entry(2));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_from_entries_truncates() {
        let entries: Vec<JournalEntry> = (0..60).rev().map(entry).collect();
        let history = History::from_entries(entries);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.newest().unwrap().content, "entry number 59");
    }
}
