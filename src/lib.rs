//! gotohp - an unofficial Google Photos client.
//!
//! This library backs the `gotohp` command-line tool and the desktop front
//! end.
//!
//! # Features
//!
//! - Upload files or directory trees with bounded concurrency
//! - Download originals, edited versions and thumbnails by media key
//! - Store several accounts and switch between them with partial matching
//!
//! # Example
//!
//! ```no_run
//! use gotohp::{Config, MediaBrowser, PhotosClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(&Config::default_path()?)?;
//!     let browser = MediaBrowser::new(PhotosClient::new(&config)?);
//!
//!     let path = browser.download_media("AF1QipNx7hT0kLq9").await?;
//!     println!("saved to {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod upload;

// Re-exports for convenience
pub use api::{DownloadUrls, PhotosApi, PhotosClient, ThumbnailOptions};
pub use config::{Config, ConfigManager};
pub use credentials::{match_email, parse_auth_string, AuthParams};
pub use error::{Error, Result};
pub use media::{MediaBrowser, ThumbnailSize};
