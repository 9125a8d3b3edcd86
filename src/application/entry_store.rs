//! Persisted history of journal entries

use crate::domain::emotion::EmotionResult;
use crate::domain::entry::JournalEntry;
use crate::domain::history::History;
use crate::error::Result;
use crate::infrastructure::storage::EntrySlot;
use chrono::Utc;

/// Owns the in-memory history and its durable copy in one storage slot.
///
/// Storage failures are logged and swallowed. The in-memory history only
/// changes once a write has gone through.
pub struct EntryStore<S: EntrySlot> {
    slot: S,
    history: History,
}

impl<S: EntrySlot> EntryStore<S> {
    /// Create a store with an empty history. Call `load` to read the slot.
    pub fn new(slot: S) -> Self {
        EntryStore {
            slot,
            history: History::new(),
        }
    }

    /// Replace the in-memory history with what the slot holds.
    /// Missing, unreadable or corrupt data leaves the history empty.
    pub fn load(&mut self) {
        match self.read_history() {
            Ok(Some(history)) => {
                log::info!("Loaded {} journal entries", history.len());
                self.history = history;
            }
            Ok(None) => {
                log::debug!("No saved journal entries yet");
                self.history = History::new();
            }
            Err(e) => {
                log::error!("Error loading entries: {}", e);
                self.history = History::new();
            }
        }
    }

    /// Record a new entry stamped now, newest first, keeping the most recent
    /// fifty. Returns the saved entry, or `None` if the write failed.
    pub fn save(&mut self, content: &str, emotion: EmotionResult) -> Option<&JournalEntry> {
        let entry = JournalEntry::new(content.to_string(), emotion, Utc::now());
        let (updated, evicted) = self.history.with_newest(entry);

        // Memory only moves once the slot has the new blob
        if let Err(e) = self.write_history(&updated) {
            log::error!("Error saving entries: {}", e);
            return None;
        }

        if evicted > 0 {
            log::debug!("Evicted {} oldest journal entries", evicted);
        }
        self.history = updated;
        self.history.newest()
    }

    /// Wipe both the durable slot and the in-memory history
    pub fn clear(&mut self) {
        match self.slot.clear() {
            Ok(()) => self.history = History::new(),
            Err(e) => log::error!("Error clearing entries: {}", e),
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        self.history.entries()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn read_history(&self) -> Result<Option<History>> {
        let Some(blob) = self.slot.read()? else {
            return Ok(None);
        };
        let entries: Vec<JournalEntry> = serde_json::from_str(&blob)?;
        Ok(Some(History::from_entries(entries)))
    }

    fn write_history(&self, history: &History) -> Result<()> {
        let blob = serde_json::to_string(history.entries())?;
        self.slot.write(&blob)
    }
}
