//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{BackendKind, Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, backend: BackendKind) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new(backend);
    repo.save_config(&config)?;

    log::info!("Initialized journal at {}", path.display());
    println!("Initialized jielewe journal at {}", path.display());
    println!("Backend: {}", backend);

    Ok(())
}
