//! Latest-image registry
//!
//! Maps each watched folder name to the most recently created image path in
//! that folder. The key set is fixed at construction: entries are only ever
//! overwritten, never inserted or removed.
//!
//! Readers take a shared lock and copy out a snapshot, so a reader sees
//! either the old or the new value of an entry, never a partial write.

use crate::folder::FolderSet;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown folder: {0}")]
    UnknownFolder(String),
}

/// Thread-safe folder name -> latest image path table
#[derive(Debug)]
pub struct LatestImageRegistry {
    entries: RwLock<BTreeMap<String, PathBuf>>,
    /// Number of successful overwrites since construction
    generation: AtomicU64,
}

impl LatestImageRegistry {
    /// Create a registry with one entry per folder, set to its placeholder
    pub fn new(folders: &FolderSet) -> Self {
        let entries = folders
            .iter()
            .map(|f| (f.name.clone(), f.placeholder.clone()))
            .collect();

        Self {
            entries: RwLock::new(entries),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of every entry
    pub fn get_all(&self) -> BTreeMap<String, PathBuf> {
        self.entries.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<PathBuf> {
        self.entries.read().get(name).cloned()
    }

    /// Overwrite the entry for `name`
    ///
    /// Path existence is not checked. Unknown names are rejected so the key
    /// set stays exactly what it was at startup.
    pub fn set(&self, name: &str, path: impl AsRef<Path>) -> Result<(), RegistryError> {
        let mut entries = self.entries.write();
        let slot = entries
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownFolder(name.to_string()))?;
        *slot = path.as_ref().to_path_buf();
        self.generation.fetch_add(1, Ordering::Release);
        Ok(())
    }

    /// Folder names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
