//! Concurrent upload of a batch of files.

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};

use crate::api::{PhotosApi, UploadOptions, UploadOutcome};
use crate::error::Result;
use crate::output::create_item_bar;

/// Totals for one upload run.
#[derive(Debug, Default)]
pub struct UploadSummary {
    pub uploaded: u64,
    pub already_present: u64,
    pub deleted: u64,
    pub failed: Vec<(PathBuf, String)>,
    /// Files that reached the library but could not be removed locally.
    pub delete_failed: Vec<(PathBuf, String)>,
}

/// What happened to the local copy after a successful upload.
#[derive(Debug)]
enum LocalCopy {
    Kept,
    Deleted,
    DeleteFailed(String),
}

impl UploadSummary {
    pub fn total(&self) -> u64 {
        self.uploaded + self.already_present + self.failed.len() as u64
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: Result<(UploadOutcome, LocalCopy)>) {
        match result {
            Ok((outcome, local)) => {
                match outcome {
                    UploadOutcome::Uploaded { .. } => self.uploaded += 1,
                    UploadOutcome::AlreadyExists { .. } => self.already_present += 1,
                }
                match local {
                    LocalCopy::Kept => {}
                    LocalCopy::Deleted => self.deleted += 1,
                    LocalCopy::DeleteFailed(reason) => self.delete_failed.push((path, reason)),
                }
            }
            Err(e) => {
                tracing::warn!("Failed to upload {}: {}", path.display(), e);
                self.failed.push((path, e.to_string()));
            }
        }
    }
}

/// Upload `files` with at most `options.threads` uploads in flight.
pub async fn upload_files(
    api: &dyn PhotosApi,
    files: Vec<PathBuf>,
    options: &UploadOptions,
) -> UploadSummary {
    let threads = options.threads.max(1);
    let progress = create_item_bar(files.len() as u64, "Uploading");

    let mut results = stream::iter(files.into_iter().map(|path| async move {
        let result = upload_one(api, &path, options).await;
        (path, result)
    }))
    .buffer_unordered(threads);

    let mut summary = UploadSummary::default();
    while let Some((path, result)) = results.next().await {
        progress.inc(1);
        summary.record(path, result);
    }
    progress.finish_and_clear();

    summary
}

async fn upload_one(
    api: &dyn PhotosApi,
    path: &Path,
    options: &UploadOptions,
) -> Result<(UploadOutcome, LocalCopy)> {
    tracing::debug!("Uploading {}", path.display());
    let outcome = api.upload_file(path, options).await?;

    match &outcome {
        UploadOutcome::Uploaded { media_key } => {
            tracing::info!("Uploaded {} as {}", path.display(), media_key)
        }
        UploadOutcome::AlreadyExists { media_key } => {
            tracing::info!("{} already in library as {}", path.display(), media_key)
        }
    }

    if !options.delete_from_host {
        return Ok((outcome, LocalCopy::Kept));
    }

    // A failed delete never turns a completed upload into a failure.
    let local = match tokio::fs::remove_file(path).await {
        Ok(()) => {
            tracing::debug!("Deleted {}", path.display());
            LocalCopy::Deleted
        }
        Err(e) => {
            tracing::warn!("Could not delete {} after upload: {}", path.display(), e);
            LocalCopy::DeleteFailed(e.to_string())
        }
    };

    Ok((outcome, local))
}
