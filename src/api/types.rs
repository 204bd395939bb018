//! Request and response types exchanged with the media API.

/// Which rendition of a media item to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlVariant {
    #[default]
    Original,
    Edited,
}

/// Download URLs for one media item. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadUrls {
    pub original_url: String,
    pub edited_url: String,
}

impl DownloadUrls {
    /// URL for the requested variant, falling back to the other one.
    pub fn select(&self, variant: UrlVariant) -> Option<&str> {
        let (first, second) = match variant {
            UrlVariant::Original => (&self.original_url, &self.edited_url),
            UrlVariant::Edited => (&self.edited_url, &self.original_url),
        };

        [first, second]
            .into_iter()
            .find(|url| !url.is_empty())
            .map(String::as_str)
    }

    /// Original if available, otherwise edited.
    pub fn preferred(&self) -> Option<&str> {
        self.select(UrlVariant::Original)
    }
}

/// Thumbnail rendering options. A zero dimension leaves it to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThumbnailOptions {
    pub width: u32,
    pub height: u32,
    pub force_jpeg: bool,
    pub no_overlay: bool,
}

/// Metadata for a single media item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaInfo {
    pub media_key: String,
    /// Remote filename; empty when the server does not report one.
    pub filename: String,
    pub size_bytes: Option<u64>,
    /// Capture time in milliseconds since the epoch.
    pub timestamp: Option<i64>,
}

/// An entry in a media list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaItem {
    pub media_key: String,
    pub filename: String,
    pub timestamp: Option<i64>,
    pub dedup_key: Option<String>,
}

/// One page of the library listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaListResult {
    pub items: Vec<MediaItem>,
    /// Token for the next page; `None` on the last page.
    pub next_page_token: Option<String>,
}

/// Options forwarded to the uploader for each file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub threads: usize,
    pub recursive: bool,
    pub force: bool,
    pub delete_from_host: bool,
    pub disable_filter: bool,
}

/// Result of uploading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { media_key: String },
    /// The library already holds this file; nothing was transferred.
    AlreadyExists { media_key: String },
}

impl UploadOutcome {
    pub fn media_key(&self) -> &str {
        match self {
            UploadOutcome::Uploaded { media_key } | UploadOutcome::AlreadyExists { media_key } => {
                media_key
            }
        }
    }
}
