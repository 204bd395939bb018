//! Configuration module for gotohp.
//!
//! This module handles:
//! - Loading and saving the TOML config file
//! - Credential storage through [`ConfigManager`]

pub mod loader;
pub mod manager;

pub use loader::{Config, UploadConfig};
pub use manager::ConfigManager;
