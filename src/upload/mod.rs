//! Upload module.
//!
//! This module provides:
//! - File selection with type filtering
//! - Bounded-concurrency uploading with per-file outcomes

pub mod files;
pub mod runner;

pub use files::{collect_files, is_supported_media};
pub use runner::{upload_files, UploadSummary};
