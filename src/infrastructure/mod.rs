//! Infrastructure layer - External I/O and persistence

pub mod backend;
pub mod config;
pub mod repository;
pub mod storage;

pub use backend::{backend_from_config, HttpBackend, KeywordBackend, SentimentBackend};
pub use config::{BackendKind, Config};
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{EntrySlot, FileSlot, MemorySlot};
