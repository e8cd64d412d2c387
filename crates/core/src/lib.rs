//! Core types for imagewall
//!
//! This crate provides:
//! - Watched folder definitions (`WatchedFolder`, `FolderSet`)
//! - The latest-image registry shared between the watcher and HTTP readers
//! - The image suffix rule
//! - TOML configuration

pub mod config;
pub mod folder;
pub mod image;
pub mod registry;

// Re-exports
pub use config::{ConfigError, FolderConfig, ImagewallConfig, ServerConfig};
pub use folder::{FolderError, FolderSet, WatchedFolder};
pub use image::is_image_path;
pub use registry::{LatestImageRegistry, RegistryError};
