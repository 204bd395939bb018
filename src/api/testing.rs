//! In-memory `PhotosApi` used by unit tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::client::PhotosApi;
use crate::api::types::*;
use crate::error::{Error, Result};

#[derive(Default)]
pub struct FakeApi {
    pub urls: DownloadUrls,
    pub info: MediaInfo,
    pub list: MediaListResult,
    pub payload: Vec<u8>,
    /// Files reported as already present in the library.
    pub existing: HashSet<PathBuf>,
    /// Files whose upload fails.
    pub failing: HashSet<PathBuf>,
    pub calls: Mutex<Vec<String>>,
    pub thumbnail_requests: Mutex<Vec<ThumbnailOptions>>,
    pub uploaded: Mutex<Vec<PathBuf>>,
}

impl FakeApi {
    pub fn with_urls(original: &str, edited: &str) -> Self {
        Self {
            urls: DownloadUrls {
                original_url: original.to_string(),
                edited_url: edited.to_string(),
            },
            payload: b"media-bytes".to_vec(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PhotosApi for FakeApi {
    async fn get_media_list(&self, page_token: Option<&str>, limit: u32) -> Result<MediaListResult> {
        self.record(format!("list {} {}", page_token.unwrap_or("-"), limit));
        Ok(self.list.clone())
    }

    async fn get_media_info(&self, media_key: &str) -> Result<MediaInfo> {
        self.record(format!("info {}", media_key));
        Ok(self.info.clone())
    }

    async fn get_download_urls(&self, media_key: &str) -> Result<DownloadUrls> {
        self.record(format!("urls {}", media_key));
        Ok(self.urls.clone())
    }

    async fn get_thumbnail(&self, media_key: &str, options: &ThumbnailOptions) -> Result<Vec<u8>> {
        self.record(format!("thumbnail {}", media_key));
        self.thumbnail_requests.lock().unwrap().push(*options);
        Ok(self.payload.clone())
    }

    async fn download_media(&self, url: &str) -> Result<Vec<u8>> {
        self.record(format!("download_media {}", url));
        Ok(self.payload.clone())
    }

    async fn download_file(&self, url: &str, path: &Path) -> Result<()> {
        self.record(format!("download_file {}", url));
        std::fs::write(path, &self.payload)?;
        Ok(())
    }

    async fn upload_file(&self, path: &Path, _options: &UploadOptions) -> Result<UploadOutcome> {
        if self.failing.contains(path) {
            return Err(Error::Upload(format!("rejected {}", path.display())));
        }

        self.uploaded.lock().unwrap().push(path.to_path_buf());
        let media_key = format!("key-{}", path.file_name().unwrap().to_string_lossy());
        if self.existing.contains(path) {
            Ok(UploadOutcome::AlreadyExists { media_key })
        } else {
            Ok(UploadOutcome::Uploaded { media_key })
        }
    }
}
