//! Write-and-reflect use case: analyze an entry, optionally keep it

use crate::application::classifier::EmotionClassifier;
use crate::application::entry_store::EntryStore;
use crate::domain::activities::{activities_for, Activity};
use crate::domain::emotion::EmotionResult;
use crate::domain::entry::{EntryText, JournalEntry};
use crate::error::{JieleweError, Result};
use crate::infrastructure::{EntrySlot, FileSlot, FileSystemRepository, JournalRepository};

/// Result of analyzing one entry, before it is saved
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub text: EntryText,
    pub emotion: EmotionResult,
}

impl Analysis {
    pub fn activities(&self) -> &'static [Activity] {
        activities_for(self.emotion.label())
    }
}

/// Ties a classifier to an entry store for one journal
pub struct JournalService<S: EntrySlot> {
    classifier: EmotionClassifier,
    store: EntryStore<S>,
}

impl JournalService<FileSlot> {
    /// Open the journal at `repository`, loading its config and history
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let classifier = EmotionClassifier::from_config(&config);
        Ok(JournalService::new(classifier, repository.entry_slot()))
    }
}

impl<S: EntrySlot> JournalService<S> {
    /// Build a service and load whatever history `slot` holds
    pub fn new(classifier: EmotionClassifier, slot: S) -> Self {
        let mut store = EntryStore::new(slot);
        store.load();
        JournalService { classifier, store }
    }

    /// Validate and classify `text`
    pub async fn analyze(&self, text: &str) -> Result<Analysis> {
        let text = EntryText::parse(text)?;
        let emotion = self
            .classifier
            .classify(text.as_str())
            .await
            .ok_or_else(|| JieleweError::InvalidEntry("Nothing to analyze".to_string()))?;
        Ok(Analysis { text, emotion })
    }

    /// Keep an analyzed entry in the history
    pub fn save(&mut self, analysis: &Analysis) -> Result<JournalEntry> {
        self.store
            .save(analysis.text.as_str(), analysis.emotion)
            .cloned()
            .ok_or_else(|| JieleweError::Storage("The entry could not be saved".to_string()))
    }

    /// Newest-first entries, at most `limit` when given
    pub fn history(&self, limit: Option<usize>) -> &[JournalEntry] {
        let entries = self.store.entries();
        match limit {
            Some(n) if n < entries.len() => &entries[..n],
            _ => entries,
        }
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn is_loading(&self) -> bool {
        self.classifier.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionLabel;
    use crate::infrastructure::{BackendKind, Config, MemorySlot};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_analyze_rejects_short_text() {
        let service = JournalService::new(EmotionClassifier::offline(), MemorySlot::new());
        let err = service.analyze("hi").await.unwrap_err();
        assert!(matches!(err, JieleweError::InvalidEntry(_)));
    }

    #[tokio::test]
    async fn test_analyze_and_save() {
        let slot = MemorySlot::new();
        let mut service = JournalService::new(EmotionClassifier::offline(), slot.clone());

        let analysis = service
            .analyze("Today was awesome and I had so much fun")
            .await
            .unwrap();
        assert_eq!(analysis.emotion.label(), EmotionLabel::Positive);
        assert_eq!(analysis.activities()[0].title, "Dance Party");

        // Analyzing alone does not save
        assert!(service.history(None).is_empty());

        let entry = service.save(&analysis).unwrap();
        assert_eq!(entry.content, "Today was awesome and I had so much fun");

        let reopened = JournalService::new(EmotionClassifier::offline(), slot);
        assert_eq!(reopened.history(None).len(), 1);
        assert!(!reopened.is_loading());
    }

    #[tokio::test]
    async fn test_history_limit() {
        let mut service = JournalService::new(EmotionClassifier::offline(), MemorySlot::new());
        for n in 0..5 {
            let analysis = service
                .analyze(&format!("Entry number {} of my week", n))
                .await
                .unwrap();
            service.save(&analysis).unwrap();
        }

        assert_eq!(service.history(Some(2)).len(), 2);
        assert_eq!(service.history(Some(2))[0].content, "Entry number 4 of my week");
        assert_eq!(service.history(Some(50)).len(), 5);

        service.clear();
        assert!(service.history(None).is_empty());
    }

    #[test]
    fn test_open_uses_repository() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new(BackendKind::Keyword)).unwrap();

        let service = JournalService::open(&repo).unwrap();
        assert!(service.history(None).is_empty());
    }
}
