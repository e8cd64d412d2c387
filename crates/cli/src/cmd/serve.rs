//! Watch folders and serve the image wall

use crate::util;
use anyhow::{Context, Result};
use imagewall_core::{ImagewallConfig, LatestImageRegistry};
use imagewall_server::AppState;
use imagewall_watcher::FolderWatcher;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub async fn run(mut config: ImagewallConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate().context("Invalid configuration")?;

    // 1. Folder tree (absolute paths, so event paths match the static root)
    let folders = util::prepare_folders(&config.folders)?;

    // 2. Registry seeded with placeholders
    let registry = Arc::new(LatestImageRegistry::new(&folders));

    // 3. Watcher
    let watcher = FolderWatcher::start(&folders, Arc::clone(&registry))
        .context("Failed to start file watcher")?;

    // 4. HTTP until Ctrl-C
    let state = AppState::new(registry, folders.root().to_path_buf());
    let addr = config.server.bind_addr();
    let grace = Duration::from_secs(config.server.shutdown_timeout_secs);

    let served = imagewall_server::serve(state, &addr, shutdown_signal(), grace).await;

    // 5. Stop watcher regardless of how the server ended
    tokio::task::spawn_blocking(move || watcher.stop())
        .await
        .context("Watcher shutdown task failed")?
        .context("Failed to stop file watcher")?;

    served.with_context(|| format!("HTTP server on {} failed", addr))?;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Interrupt received, shutting down"),
        Err(e) => {
            // Without a signal handler the server runs until killed
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
