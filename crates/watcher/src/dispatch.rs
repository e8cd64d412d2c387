//! Dispatch loop: raw events in, registry overwrites out
//!
//! A single thread drains the event channel for all folders. Each image
//! creation overwrites its folder's entry; there is no debouncing, so a
//! burst leaves the last created file.

use crate::event::{created_entries, EntryKind};
use crate::routes::FolderRoutes;
use crossbeam_channel::{select, Receiver};
use imagewall_core::{is_image_path, LatestImageRegistry};
use notify::Event;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Applies creation events to the registry
pub struct Dispatcher {
    routes: FolderRoutes,
    registry: Arc<LatestImageRegistry>,
}

impl Dispatcher {
    pub fn new(routes: FolderRoutes, registry: Arc<LatestImageRegistry>) -> Self {
        Self { routes, registry }
    }

    /// Handle one notify event, returning the number of registry updates
    pub fn handle(&self, event: &Event) -> usize {
        let mut updates = 0;

        for entry in created_entries(event) {
            if entry.kind == EntryKind::Directory {
                trace!("Ignoring directory creation: {}", entry.path.display());
                continue;
            }

            if !is_image_path(&entry.path) {
                trace!("Ignoring non-image file: {}", entry.path.display());
                continue;
            }

            let Some(folder) = self.routes.route(&entry.path) else {
                debug!("Ignoring image outside watched folders: {}", entry.path.display());
                continue;
            };

            match self.registry.set(folder, &entry.path) {
                Ok(()) => {
                    info!("New image detected in {}: {}", folder, entry.path.display());
                    updates += 1;
                }
                Err(e) => warn!("Dropping update for {}: {}", entry.path.display(), e),
            }
        }

        updates
    }
}

/// Run until shutdown is signalled or the event source goes away
pub(crate) fn run(
    dispatcher: Dispatcher,
    events: Receiver<notify::Result<Event>>,
    shutdown: Receiver<()>,
) {
    debug!("Dispatch loop started");

    loop {
        select! {
            recv(events) -> msg => match msg {
                Ok(Ok(event)) => {
                    dispatcher.handle(&event);
                }
                Ok(Err(e)) => warn!("File watcher error: {}", e),
                Err(_) => break,
            },
            recv(shutdown) -> _ => break,
        }
    }

    debug!("Dispatch loop stopped");
}
