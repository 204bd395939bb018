//! Media API client.

use std::path::Path;

use async_trait::async_trait;
use reqwest::{header, Client, Proxy, Response};

use crate::api::types::*;
use crate::config::Config;
use crate::credentials::{email_from_auth_string, CredentialEntry};
use crate::error::{Error, Result};
use crate::fs::write_stream;
use crate::output::create_download_bar;

/// User agent of the Android Photos app the auth strings are issued to.
const USER_AGENT: &str =
    "com.google.android.apps.photos/49029607 (Linux; U; Android 9; en_US; Pixel XL; Build/PQ2A.190205.001; Cronet/72.0.3626.121)";

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Operations the CLI and media browser need from the remote library.
#[async_trait]
pub trait PhotosApi: Send + Sync {
    /// List one page of the library.
    async fn get_media_list(&self, page_token: Option<&str>, limit: u32)
        -> Result<MediaListResult>;

    /// Fetch metadata for one item.
    async fn get_media_info(&self, media_key: &str) -> Result<MediaInfo>;

    /// Resolve original and edited download URLs.
    async fn get_download_urls(&self, media_key: &str) -> Result<DownloadUrls>;

    /// Fetch a rendered thumbnail.
    async fn get_thumbnail(&self, media_key: &str, options: &ThumbnailOptions) -> Result<Vec<u8>>;

    /// Download a resolved URL into memory.
    async fn download_media(&self, url: &str) -> Result<Vec<u8>>;

    /// Download a resolved URL to `path`.
    async fn download_file(&self, url: &str, path: &Path) -> Result<()>;

    /// Upload one local file.
    async fn upload_file(&self, path: &Path, options: &UploadOptions) -> Result<UploadOutcome>;
}

/// Client bound to the active stored credential.
pub struct PhotosClient {
    client: Client,
    email: String,
}

impl PhotosClient {
    /// Build a client for the selected credential in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let auth = resolve_credential(config)?;
        let email = email_from_auth_string(&auth)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(proxy) = config.proxy.as_deref().filter(|p| !p.is_empty()) {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy '{}': {}", proxy, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Using credentials for {}", email);

        Ok(Self { client, email })
    }

    /// Email of the account this client acts as.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Make a plain GET request against a resolved media URL.
    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "*/*")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Download(format!("HTTP {}", status)));
        }

        Ok(response)
    }
}

/// Pick the auth string for the selected email, or the first valid one.
pub fn resolve_credential(config: &Config) -> Result<String> {
    let mut valid = config
        .credentials
        .iter()
        .filter_map(|auth| {
            CredentialEntry::from_auth_string(auth)
                .into_email()
                .map(|email| (email, auth))
        })
        .peekable();

    if valid.peek().is_none() {
        return Err(Error::NoCredentials);
    }

    if config.selected.is_empty() {
        return valid
            .next()
            .map(|(_, auth)| auth.clone())
            .ok_or(Error::NoCredentials);
    }

    valid
        .find(|(email, _)| email == &config.selected)
        .map(|(_, auth)| auth.clone())
        .ok_or_else(|| Error::CredentialNotFound(config.selected.clone()))
}

#[async_trait]
impl PhotosApi for PhotosClient {
    async fn get_media_list(
        &self,
        _page_token: Option<&str>,
        _limit: u32,
    ) -> Result<MediaListResult> {
        Err(Error::Unsupported("listing media"))
    }

    async fn get_media_info(&self, _media_key: &str) -> Result<MediaInfo> {
        Err(Error::Unsupported("fetching media info"))
    }

    async fn get_download_urls(&self, _media_key: &str) -> Result<DownloadUrls> {
        Err(Error::Unsupported("resolving download URLs"))
    }

    async fn get_thumbnail(
        &self,
        _media_key: &str,
        _options: &ThumbnailOptions,
    ) -> Result<Vec<u8>> {
        Err(Error::Unsupported("rendering thumbnails"))
    }

    async fn download_media(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let bytes = response.bytes().await?;
        tracing::debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    async fn download_file(&self, url: &str, path: &Path) -> Result<()> {
        let response = self.get(url).await?;

        let content_length = response.content_length();
        let progress = content_length
            .filter(|len| *len > PROGRESS_THRESHOLD)
            .map(create_download_bar);

        let downloaded = write_stream(path, response.bytes_stream(), |written| {
            if let Some(ref pb) = progress {
                pb.set_position(written);
            }
        })
        .await;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }
        let downloaded = downloaded?;
        tracing::info!("Downloaded {} bytes to {}", downloaded, path.display());
        Ok(())
    }

    async fn upload_file(&self, _path: &Path, _options: &UploadOptions) -> Result<UploadOutcome> {
        Err(Error::Unsupported("uploading media"))
    }
}
