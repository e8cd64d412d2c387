//! Watched folder definitions
//!
//! The folder set is fixed at startup. Folder `i` (1-based) is named
//! `{prefix}{i}`, lives under the static root and carries a placeholder image
//! path used until the first real image shows up:
//!
//! ```text
//! static/
//!   image1/
//!     Place1.jpg
//!   image2/
//!     Place2.jpg
//!   ...
//! ```

use crate::config::FolderConfig;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors building or preparing the folder set
#[derive(Debug, Error)]
pub enum FolderError {
    #[error("duplicate folder name: {0}")]
    DuplicateName(String),

    #[error("failed to create folder {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single watched directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedFolder {
    /// Folder identifier (e.g. `image1`)
    pub name: String,
    /// Directory being watched
    pub path: PathBuf,
    /// Default image path reported before any image is created
    pub placeholder: PathBuf,
}

impl WatchedFolder {
    pub fn new(name: impl Into<String>, path: PathBuf, placeholder: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
            placeholder,
        }
    }
}

/// Ordered, immutable set of watched folders
#[derive(Debug, Clone)]
pub struct FolderSet {
    root: PathBuf,
    folders: Vec<WatchedFolder>,
}

impl FolderSet {
    /// Build a folder set from explicit folders
    ///
    /// Names must be unique.
    pub fn new(root: PathBuf, folders: Vec<WatchedFolder>) -> Result<Self, FolderError> {
        let mut seen = HashSet::new();
        for folder in &folders {
            if !seen.insert(folder.name.as_str()) {
                return Err(FolderError::DuplicateName(folder.name.clone()));
            }
        }

        Ok(Self { root, folders })
    }

    /// Derive the folder layout from configuration
    pub fn from_config(config: &FolderConfig) -> Self {
        let root = config.root.clone();
        let folders = (1..=config.count)
            .map(|i| {
                let name = format!("{}{}", config.prefix, i);
                let path = root.join(&name);
                let placeholder = path.join(format!(
                    "{}{}.{}",
                    config.placeholder_stem, i, config.placeholder_ext
                ));
                WatchedFolder::new(name, path, placeholder)
            })
            .collect();

        // Names are `{prefix}{i}` with distinct i, so they cannot collide
        Self { root, folders }
    }

    /// Create every folder directory (and the root) if missing
    pub fn ensure_dirs(&self) -> Result<(), FolderError> {
        let dirs = std::iter::once(&self.root).chain(self.folders.iter().map(|f| &f.path));
        for dir in dirs {
            std::fs::create_dir_all(dir).map_err(|source| FolderError::Create {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Rebuild the set with absolute, canonical paths
    ///
    /// The root and every folder must exist. Folders under the root are
    /// rebased onto the canonical root; others are resolved on their own.
    /// Placeholders follow their folder. Watch back-ends report absolute
    /// paths, so resolving up front keeps event paths and URL generation
    /// consistent.
    pub fn canonicalize(&self) -> Result<Self, FolderError> {
        let root = resolve(&self.root)?;

        let folders = self
            .folders
            .iter()
            .map(|folder| {
                let path = match folder.path.strip_prefix(&self.root) {
                    Ok(rel) => root.join(rel),
                    Err(_) => resolve(&folder.path)?,
                };
                let placeholder = match folder.placeholder.strip_prefix(&folder.path) {
                    Ok(rel) => path.join(rel),
                    Err(_) => folder.placeholder.clone(),
                };
                Ok(WatchedFolder::new(folder.name.clone(), path, placeholder))
            })
            .collect::<Result<Vec<_>, FolderError>>()?;

        Ok(Self { root, folders })
    }

    /// Folders that have no placeholder file on disk
    pub fn missing_placeholders(&self) -> Vec<&WatchedFolder> {
        self.folders
            .iter()
            .filter(|f| !f.placeholder.is_file())
            .collect()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WatchedFolder> {
        self.folders.iter()
    }

    pub fn get(&self, name: &str) -> Option<&WatchedFolder> {
        self.folders.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

fn resolve(path: &Path) -> Result<PathBuf, FolderError> {
    path.canonicalize().map_err(|source| FolderError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

impl<'a> IntoIterator for &'a FolderSet {
    type Item = &'a WatchedFolder;
    type IntoIter = std::slice::Iter<'a, WatchedFolder>;

    fn into_iter(self) -> Self::IntoIter {
        self.folders.iter()
    }
}
