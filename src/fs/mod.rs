//! Filesystem module.
//!
//! Provides:
//! - Output paths and directory management
//! - Filename generation and validation

pub mod naming;
pub mod paths;

pub use naming::{fallback_filename, media_filename, sanitize_filename, thumbnail_filename};
pub use paths::{default_download_dir, ensure_dir, partial_path, write_output, write_stream};
