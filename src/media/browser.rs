//! Library browsing helpers used by the desktop front end.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::api::{MediaListResult, PhotosApi, ThumbnailOptions};
use crate::error::{Error, Result, ResultExt};
use crate::fs::{default_download_dir, ensure_dir, media_filename};
use crate::media::thumbnail::ThumbnailSize;

/// Thin facade over a [`PhotosApi`] for listing, previewing and saving items.
pub struct MediaBrowser<A> {
    api: A,
    download_dir: Option<PathBuf>,
}

impl<A: PhotosApi> MediaBrowser<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            download_dir: None,
        }
    }

    /// Save downloads into `dir` instead of `~/Downloads/gotohp`.
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(dir.into());
        self
    }

    /// Retrieve one page of the library.
    pub async fn get_media_list(
        &self,
        page_token: Option<&str>,
        limit: u32,
    ) -> Result<MediaListResult> {
        self.api
            .get_media_list(page_token, limit)
            .await
            .context("failed to get media list")
    }

    /// Fetch a thumbnail by size name and return it base64 encoded.
    pub async fn get_thumbnail(&self, media_key: &str, size: &str) -> Result<String> {
        let (width, height) = ThumbnailSize::from_name(size).dimensions();
        let options = ThumbnailOptions {
            width,
            height,
            force_jpeg: false,
            no_overlay: false,
        };

        let data = self
            .api
            .get_thumbnail(media_key, &options)
            .await
            .context("failed to get thumbnail")?;

        Ok(STANDARD.encode(data))
    }

    /// Download an item into the downloads directory and return its path.
    pub async fn download_media(&self, media_key: &str) -> Result<PathBuf> {
        let info = self
            .api
            .get_media_info(media_key)
            .await
            .context("failed to get media info")?;

        let urls = self
            .api
            .get_download_urls(media_key)
            .await
            .context("failed to get download URLs")?;

        let url = urls
            .preferred()
            .ok_or_else(|| Error::NoDownloadUrl(media_key.to_string()))?;

        let dir = match &self.download_dir {
            Some(dir) => dir.clone(),
            None => default_download_dir().context("failed to get home directory")?,
        };
        ensure_dir(&dir).context("failed to create downloads directory")?;

        let filename = media_filename(&info.filename, media_key)?;
        let output_path = dir.join(filename);

        self.api
            .download_file(url, &output_path)
            .await
            .context("failed to download file")?;

        tracing::info!("Saved {} to {}", media_key, output_path.display());
        Ok(output_path)
    }
}
