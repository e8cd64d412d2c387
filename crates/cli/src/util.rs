//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use imagewall_core::{FolderConfig, FolderSet, ImagewallConfig};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Map `-v` occurrences to a log level
pub fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize tracing to stderr, or to a file when `log_file` is given
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = log_level(verbosity);

    let Some(log_file) = log_file else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_file
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", log_file.display()))?;

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Load configuration, reporting where it came from
pub fn load_config(explicit: Option<&Path>) -> Result<(ImagewallConfig, Option<PathBuf>)> {
    let (config, origin) = ImagewallConfig::discover(explicit).context("Failed to load configuration")?;

    match &origin {
        Some(path) => tracing::debug!("Using config {}", path.display()),
        None => tracing::debug!("Using built-in defaults"),
    }

    Ok((config, origin))
}

/// Create the folder tree and resolve it to absolute paths
pub fn prepare_folders(config: &FolderConfig) -> Result<FolderSet> {
    let folders = FolderSet::from_config(config);
    folders.ensure_dirs().context("Failed to create watched folders")?;

    let folders = folders
        .canonicalize()
        .context("Failed to resolve watched folders")?;

    for folder in folders.missing_placeholders() {
        tracing::warn!(
            "Placeholder missing for {}: {}",
            folder.name,
            folder.placeholder.display()
        );
    }

    Ok(folders)
}
