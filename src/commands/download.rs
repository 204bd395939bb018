//! `download` command.

use std::path::{Path, PathBuf};

use crate::api::PhotosApi;
use crate::cli::DownloadArgs;
use crate::commands::{connect, load_config};
use crate::error::{Error, Result, ResultExt};
use crate::fs::write_output;
use crate::output::print_success;

pub async fn run(args: DownloadArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let api = connect(&config)?;

    let (path, bytes) = download(&api, &args).await?;
    print_success(&format!(
        "Downloaded {} bytes to {}",
        bytes,
        path.display()
    ));
    Ok(())
}

/// Fetch the requested rendition and write it to the output path.
pub async fn download(api: &dyn PhotosApi, args: &DownloadArgs) -> Result<(PathBuf, usize)> {
    let urls = api
        .get_download_urls(&args.media_key)
        .await
        .context("failed to get download URLs")?;

    let url = urls
        .select(args.variant())
        .ok_or_else(|| Error::NoDownloadUrl(args.media_key.clone()))?;

    let data = api
        .download_media(url)
        .await
        .context("failed to download media")?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&args.media_key));

    write_output(&path, &data)
        .await
        .context("failed to write file")?;

    Ok((path, data.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeApi;
    use tempfile::TempDir;

    fn args(output: PathBuf, original: bool, edited: bool) -> DownloadArgs {
        DownloadArgs {
            media_key: "AF1QipKey".to_string(),
            output: Some(output),
            original,
            edited,
        }
    }

    #[tokio::test]
    async fn test_prefers_original() {
        let tmp = TempDir::new().unwrap();
        let api = FakeApi::with_urls("https://o", "https://e");
        let out = tmp.path().join("photo.jpg");

        let (path, bytes) = download(&api, &args(out.clone(), false, false)).await.unwrap();
        assert_eq!(path, out);
        assert_eq!(bytes, b"media-bytes".len());
        assert_eq!(api.calls(), vec!["urls AF1QipKey", "download_media https://o"]);
    }

    #[tokio::test]
    async fn test_edited_falls_back_to_original() {
        let tmp = TempDir::new().unwrap();
        let api = FakeApi::with_urls("https://o", "");

        download(&api, &args(tmp.path().join("x"), false, true)).await.unwrap();
        assert!(api.calls().contains(&"download_media https://o".to_string()));
    }

    #[tokio::test]
    async fn test_original_falls_back_to_edited() {
        let tmp = TempDir::new().unwrap();
        let api = FakeApi::with_urls("", "https://e");

        download(&api, &args(tmp.path().join("x"), true, false)).await.unwrap();
        assert!(api.calls().contains(&"download_media https://e".to_string()));
    }

    #[tokio::test]
    async fn test_no_urls() {
        let tmp = TempDir::new().unwrap();
        let api = FakeApi::with_urls("", "");

        let err = download(&api, &args(tmp.path().join("x"), false, false))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoDownloadUrl(_)));
        assert!(!tmp.path().join("x").exists());
    }

    #[tokio::test]
    async fn test_write_failure_has_context() {
        let tmp = TempDir::new().unwrap();
        let api = FakeApi::with_urls("https://o", "");
        let out = tmp.path().join("missing-dir").join("x");

        let err = download(&api, &args(out, false, false)).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to write file: "));
    }
}
