//! `thumbnail` command.

use std::path::{Path, PathBuf};

use crate::api::{PhotosApi, ThumbnailOptions};
use crate::cli::ThumbnailArgs;
use crate::commands::{connect, load_config};
use crate::error::{Result, ResultExt};
use crate::fs::{thumbnail_filename, write_output};
use crate::output::print_success;

pub async fn run(args: ThumbnailArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let api = connect(&config)?;

    let (path, bytes) = thumbnail(&api, &args).await?;
    print_success(&format!(
        "Downloaded thumbnail ({} bytes) to {}",
        bytes,
        path.display()
    ));
    Ok(())
}

/// Fetch a JPEG thumbnail and write it to the output path.
pub async fn thumbnail(api: &dyn PhotosApi, args: &ThumbnailArgs) -> Result<(PathBuf, usize)> {
    let options = ThumbnailOptions {
        width: args.width,
        height: args.height,
        force_jpeg: true,
        no_overlay: args.no_overlay,
    };

    let data = api
        .get_thumbnail(&args.media_key, &options)
        .await
        .context("failed to get thumbnail")?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(thumbnail_filename(&args.media_key)));

    write_output(&path, &data)
        .await
        .context("failed to write file")?;

    Ok((path, data.len()))
}
