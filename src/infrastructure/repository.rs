//! Journal directory repository

use crate::error::{JieleweError, Result};
use crate::infrastructure::config::{Config, JOURNAL_DIR};
use crate::infrastructure::storage::{FileSlot, ENTRIES_FILE};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Overrides directory discovery when set
pub const ROOT_ENV_VAR: &str = "JIELEWE_ROOT";

/// Where a journal keeps its config and entries
pub trait JournalRepository {
    fn load_config(&self) -> Result<Config>;

    fn save_config(&self, config: &Config) -> Result<()>;

    /// Create the `.jielewe` directory. Fails if the journal already exists.
    fn initialize(&self) -> Result<()>;

    /// Storage slot holding the entry history
    fn entry_slot(&self) -> FileSlot;
}

/// A journal rooted at a directory containing `.jielewe/`
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the journal for this process.
    pub fn discover() -> Result<Self> {
        // 1. JIELEWE_ROOT wins when set, and must point at a journal
        if let Some(root) = root_from_env()? {
            return Ok(FileSystemRepository::new(root));
        }

        // 2. Otherwise the nearest ancestor of the working directory
        Self::discover_from(&std::env::current_dir()?)
    }

    /// Nearest directory at or above `start` that holds a journal
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| holds_journal(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| JieleweError::NotJieleweDirectory(start.to_path_buf()))
    }

    fn journal_dir(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR)
    }
}

fn holds_journal(dir: &Path) -> bool {
    dir.join(JOURNAL_DIR).is_dir()
}

fn root_from_env() -> Result<Option<PathBuf>> {
    let root = match std::env::var_os(ROOT_ENV_VAR) {
        Some(value) => PathBuf::from(value),
        None => return Ok(None),
    };

    if !holds_journal(&root) {
        return Err(JieleweError::Config(format!(
            "{} is set to '{}' but no .jielewe directory found. \
            Run 'jielewe init' in that directory or unset {}.",
            ROOT_ENV_VAR,
            root.display(),
            ROOT_ENV_VAR
        )));
    }

    log::debug!("Using journal from {}: {}", ROOT_ENV_VAR, root.display());
    Ok(Some(root))
}

impl JournalRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        match fs::create_dir(self.journal_dir()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(JieleweError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            ))),
            Err(e) => Err(JieleweError::Io(e)),
        }
    }

    fn entry_slot(&self) -> FileSlot {
        FileSlot::new(self.journal_dir().join(ENTRIES_FILE))
    }
}
