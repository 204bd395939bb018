//! Command handlers.
//!
//! Each handler loads the config (honouring `--config`), talks to the API
//! and prints its result. Errors carry a one-line context for `main` to show.

pub mod credentials;
pub mod download;
pub mod get_urls;
pub mod thumbnail;
pub mod upload;

use std::path::Path;

use crate::api::PhotosClient;
use crate::config::{Config, ConfigManager};
use crate::error::{Result, ResultExt};

/// Load the config from the override path or the default location.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    ConfigManager::load(config_path)
        .map(ConfigManager::into_config)
        .context("failed to load config")
}

/// Build an API client for the active credential.
pub fn connect(config: &Config) -> Result<PhotosClient> {
    PhotosClient::new(config).context("failed to create API client")
}
