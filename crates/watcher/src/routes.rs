//! Event path -> folder name routing
//!
//! One listener serves every folder. A created entry belongs to a folder
//! when its parent directory is exactly that folder's directory; anything
//! deeper is not ours.

use imagewall_core::FolderSet;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct FolderRoutes {
    by_dir: HashMap<PathBuf, String>,
}

impl FolderRoutes {
    /// Build routes for every folder in the set
    ///
    /// Each folder is registered under its configured path and, when it
    /// resolves, its canonical path. Some back-ends (FSEvents) report
    /// canonical paths regardless of what was passed to `watch`.
    pub fn new(folders: &FolderSet) -> Self {
        let mut by_dir = HashMap::new();

        for folder in folders {
            by_dir.insert(folder.path.clone(), folder.name.clone());
            if let Ok(canonical) = folder.path.canonicalize() {
                by_dir.insert(canonical, folder.name.clone());
            }
        }

        Self { by_dir }
    }

    /// Folder name owning a directly contained entry
    pub fn route(&self, path: &Path) -> Option<&str> {
        let parent = path.parent()?;
        self.by_dir.get(parent).map(String::as_str)
    }
}
