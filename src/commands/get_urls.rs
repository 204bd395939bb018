//! `get-urls` command.

use std::path::Path;

use crate::api::{DownloadUrls, PhotosApi};
use crate::cli::GetUrlsArgs;
use crate::commands::{connect, load_config};
use crate::error::{Result, ResultExt};
use crate::output::print_info;

pub async fn run(args: GetUrlsArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let api = connect(&config)?;

    for line in get_urls(&api, &args.media_key).await? {
        print_info(&line);
    }
    Ok(())
}

/// Resolve the URLs for `media_key` and render them for display.
pub async fn get_urls(api: &dyn PhotosApi, media_key: &str) -> Result<Vec<String>> {
    let urls = api
        .get_download_urls(media_key)
        .await
        .context("failed to get download URLs")?;
    Ok(format_urls(&urls))
}

fn format_urls(urls: &DownloadUrls) -> Vec<String> {
    let show = |url: &str| {
        if url.is_empty() {
            "(not available)".to_string()
        } else {
            url.to_string()
        }
    };

    vec![
        "Download URLs:".to_string(),
        format!("  Original: {}", show(&urls.original_url)),
        format!("  Edited:   {}", show(&urls.edited_url)),
    ]
}
