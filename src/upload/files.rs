//! Selecting local files for upload.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Whether the library accepts this file type (images and videos).
pub fn is_supported_media(path: &Path) -> bool {
    mime_guess::from_path(path).iter().any(|mime| {
        let top = mime.type_();
        top == mime_guess::mime::IMAGE || top == mime_guess::mime::VIDEO
    })
}

/// Collect the files to upload from a file or directory path.
///
/// Subdirectories are walked only when `recursive` is set. Results are sorted
/// so runs are reproducible.
pub fn collect_files(root: &Path, recursive: bool, disable_filter: bool) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    if root.is_file() {
        files.push(root.to_path_buf());
    } else {
        walk(root, recursive, &mut files)?;
    }

    if !disable_filter {
        let before = files.len();
        files.retain(|f| is_supported_media(f));
        let skipped = before - files.len();
        if skipped > 0 {
            tracing::info!("Skipping {} unsupported file(s)", skipped);
        }
    }

    files.sort();
    Ok(files)
}

fn walk(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // file_type() does not follow symlinks; linked directories are never walked.
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            if recursive {
                walk(&path, recursive, files)?;
            }
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            files.push(path);
        }
    }
    Ok(())
}
