//! Classification of raw notify events
//!
//! Only entry creations matter. Everything else (modify, remove, rename,
//! access) is dropped here.

use notify::event::CreateKind;
use notify::{Event, EventKind};
use std::path::PathBuf;

/// What kind of entry a creation event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single created filesystem entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEntry {
    /// Path reported by the watch back-end
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Extract created entries from a notify event
///
/// Back-ends that cannot tell files from directories report
/// `CreateKind::Any`/`Other`; for those the filesystem is consulted. An entry
/// that no longer exists is treated as a file.
pub fn created_entries(event: &Event) -> Vec<CreatedEntry> {
    let create_kind = match event.kind {
        EventKind::Create(kind) => kind,
        _ => return Vec::new(),
    };

    event
        .paths
        .iter()
        .map(|path| {
            let kind = match create_kind {
                CreateKind::File => EntryKind::File,
                CreateKind::Folder => EntryKind::Directory,
                CreateKind::Any | CreateKind::Other => {
                    if path.is_dir() {
                        EntryKind::Directory
                    } else {
                        EntryKind::File
                    }
                }
            };
            CreatedEntry {
                path: path.clone(),
                kind,
            }
        })
        .collect()
}
