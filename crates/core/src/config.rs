//! Configuration loading and validation
//!
//! Configuration is read from TOML. Every field has a default, so an empty
//! file (or no file at all) yields the stock nine-folder layout:
//!
//! ```toml
//! [folders]
//! root = "static"
//! prefix = "image"
//! count = 9
//! placeholder_stem = "Place"
//! placeholder_ext = "jpg"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//! shutdown_timeout_secs = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "imagewall.toml";

/// Upper bound on the number of watched folders
pub const MAX_FOLDERS: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagewallConfig {
    pub folders: FolderConfig,
    pub server: ServerConfig,
}

/// Watched folder layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderConfig {
    /// Static root; folders are created directly beneath it
    pub root: PathBuf,
    /// Folder name prefix, suffixed with 1..=count
    pub prefix: String,
    /// Number of watched folders
    pub count: usize,
    /// Placeholder file stem, suffixed with the folder index
    pub placeholder_stem: String,
    /// Placeholder file extension (without the dot)
    pub placeholder_ext: String,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("static"),
            prefix: "image".to_string(),
            count: 9,
            placeholder_stem: "Place".to_string(),
            placeholder_ext: "jpg".to_string(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// How long graceful shutdown waits for in-flight requests
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            shutdown_timeout_secs: 5,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ImagewallConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(source: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Load from the first config file found, or fall back to defaults
    ///
    /// Returns the config and the file it came from, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for candidate in search_paths() {
            if candidate.is_file() {
                tracing::debug!("Loading config from {}", candidate.display());
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Write config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let folders = &self.folders;

        if folders.count == 0 || folders.count > MAX_FOLDERS {
            return Err(ConfigError::Invalid(format!(
                "folders.count must be between 1 and {} (got {})",
                MAX_FOLDERS, folders.count
            )));
        }

        if folders.prefix.is_empty() {
            return Err(ConfigError::Invalid("folders.prefix must not be empty".into()));
        }

        if folders.prefix.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "folders.prefix must not contain path separators (got {:?})",
                folders.prefix
            )));
        }

        if folders.placeholder_ext.is_empty() || folders.placeholder_ext.starts_with('.') {
            return Err(ConfigError::Invalid(
                "folders.placeholder_ext must be a bare extension like \"jpg\"".into(),
            ));
        }

        if self.server.host.is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }

        Ok(())
    }
}

/// Per-user config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("imagewall").join("config.toml"))
}

/// Config files consulted in order when none is given explicitly
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    paths.extend(user_config_path());
    paths
}

/// Annotated example configuration
pub fn example_config() -> &'static str {
    r#"# imagewall configuration

[folders]
# Static root; watched folders are created directly beneath it and
# served under /static/
root = "static"
# Folder names are <prefix>1 .. <prefix><count>
prefix = "image"
count = 9
# Default image per folder: <root>/<prefix><i>/<placeholder_stem><i>.<placeholder_ext>
placeholder_stem = "Place"
placeholder_ext = "jpg"

[server]
host = "127.0.0.1"
port = 5000
# Seconds to wait for in-flight requests on shutdown
shutdown_timeout_secs = 5
"#
}
