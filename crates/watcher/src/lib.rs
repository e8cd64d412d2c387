//! File system watching for imagewall
//!
//! This crate provides the notification listener:
//! - One OS watcher covering every folder (non-recursive)
//! - A single dispatch thread applying image creations to the registry
//! - Clean shutdown that joins the dispatch thread

pub mod dispatch;
pub mod event;
pub mod routes;

pub use dispatch::Dispatcher;
pub use event::{created_entries, CreatedEntry, EntryKind};
pub use routes::FolderRoutes;

use crossbeam_channel::Sender;
use imagewall_core::{FolderSet, LatestImageRegistry};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("failed to initialize file watcher: {0}")]
    Init(#[source] notify::Error),

    #[error("failed to watch {path}: {source}")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("failed to spawn dispatch thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("dispatch thread panicked")]
    DispatchPanicked,
}

/// Watches a folder set and keeps the registry up to date
///
/// Dropping a running watcher stops it; call [`FolderWatcher::stop`] to
/// observe a dispatch thread panic.
pub struct FolderWatcher {
    watcher: Option<RecommendedWatcher>,
    shutdown_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl FolderWatcher {
    /// Start watching every folder in the set
    ///
    /// Folders must already exist. Events for all folders funnel into one
    /// dispatch thread.
    pub fn start(
        folders: &FolderSet,
        registry: Arc<LatestImageRegistry>,
    ) -> Result<Self, WatchError> {
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded(1);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<notify::Event>| {
                // Receiver is gone only during shutdown
                let _ = event_tx.send(res);
            },
            Config::default(),
        )
        .map_err(WatchError::Init)?;

        for folder in folders {
            watcher
                .watch(&folder.path, RecursiveMode::NonRecursive)
                .map_err(|source| WatchError::Watch {
                    path: folder.path.clone(),
                    source,
                })?;
            debug!("Watching {} ({})", folder.name, folder.path.display());
        }

        let dispatcher = Dispatcher::new(FolderRoutes::new(folders), registry);
        let handle = std::thread::Builder::new()
            .name("imagewall-dispatch".to_string())
            .spawn(move || dispatch::run(dispatcher, event_rx, shutdown_rx))
            .map_err(WatchError::Spawn)?;

        info!("Watching {} folders", folders.len());

        Ok(Self {
            watcher: Some(watcher),
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Stop watching and join the dispatch thread
    pub fn stop(mut self) -> Result<(), WatchError> {
        self.shutdown()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn shutdown(&mut self) -> Result<(), WatchError> {
        // Dropping the OS watcher releases the event sender
        drop(self.watcher.take());

        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        if let Some(handle) = self.handle.take() {
            handle.join().map_err(|_| WatchError::DispatchPanicked)?;
            info!("File watcher stopped");
        }

        Ok(())
    }
}

impl Drop for FolderWatcher {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
