//! Application layer - Use cases and orchestration

pub mod classifier;
pub mod entry_store;
pub mod init;
pub mod journal;
pub mod manage_config;

pub use classifier::EmotionClassifier;
pub use entry_store::EntryStore;
pub use journal::{Analysis, JournalService};
pub use manage_config::ConfigService;
