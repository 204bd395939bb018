//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Stored auth strings, one per account.
    #[serde(default)]
    pub credentials: Vec<String>,

    /// Email of the active credential. Empty when nothing is selected.
    #[serde(default)]
    pub selected: String,

    /// Proxy URL for all HTTP traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,

    #[serde(default)]
    pub upload: UploadConfig,
}

/// Upload defaults, overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Number of uploads in flight.
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// Descend into subdirectories.
    #[serde(default)]
    pub recursive: bool,

    /// Upload even if the file already exists in the library.
    #[serde(default)]
    pub force: bool,

    /// Delete local files once uploaded.
    #[serde(default)]
    pub delete_from_host: bool,

    /// Upload every file regardless of type.
    #[serde(default)]
    pub disable_filter: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            recursive: false,
            force: false,
            delete_from_host: false,
            disable_filter: false,
        }
    }
}

fn default_threads() -> usize {
    3
}

impl Config {
    /// Default config file location in the per-user config directory.
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "gotohp")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Load configuration from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating its directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }
}
