//! Durable slot holding the serialized entry history

use crate::error::{JieleweError, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub const ENTRIES_FILE: &str = "entries.json";

/// A single named storage slot whose contents are always replaced whole
pub trait EntrySlot {
    /// Read the stored blob, `None` when nothing has been written yet
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored blob
    fn write(&self, blob: &str) -> Result<()>;

    /// Remove the stored blob
    fn clear(&self) -> Result<()>;
}

/// Slot backed by a JSON file. Writes go to a sibling temp file which is
/// then renamed over the target.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        FileSlot { path }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| ENTRIES_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl EntrySlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JieleweError::Io(e)),
        }
    }

    fn write(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Readers see either the old blob or the new one, never a partial write
        let temp = self.temp_path();
        fs::write(&temp, blob)?;
        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            JieleweError::Storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JieleweError::Io(e)),
        }
    }
}

/// In-process slot. Clones share the same contents, so a second store built
/// from a clone sees what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        MemorySlot::default()
    }

    /// Slot pre-filled with a blob
    pub fn with_contents(blob: impl Into<String>) -> Self {
        MemorySlot {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.blob
            .lock()
            .map_err(|_| JieleweError::Storage("Memory slot lock poisoned".to_string()))
    }
}

impl EntrySlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, blob: &str) -> Result<()> {
        *self.lock()? = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}
