//! Media browsing module.

pub mod browser;
pub mod thumbnail;

pub use browser::MediaBrowser;
pub use thumbnail::ThumbnailSize;
