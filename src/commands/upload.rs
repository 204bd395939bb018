//! `upload` command.

use std::path::Path;

use crate::api::PhotosApi;
use crate::cli::UploadArgs;
use crate::commands::{connect, load_config};
use crate::config::UploadConfig;
use crate::error::{Error, Result};
use crate::output::print_upload_summary;
use crate::upload::{collect_files, upload_files, UploadSummary};

pub async fn run(args: UploadArgs, config_path: Option<&Path>) -> Result<()> {
    if !args.filepath.exists() {
        return Err(Error::PathNotFound(args.filepath));
    }

    let config = load_config(config_path)?;
    let api = connect(&config)?;

    let summary = upload(&api, &args, &config.upload).await?;
    print_upload_summary(&summary);

    if !summary.is_success() {
        return Err(Error::Upload(format!(
            "{} of {} file(s) failed",
            summary.failed.len(),
            summary.total()
        )));
    }
    Ok(())
}

/// Select files under the upload path and upload them.
pub async fn upload(
    api: &dyn PhotosApi,
    args: &UploadArgs,
    defaults: &UploadConfig,
) -> Result<UploadSummary> {
    let options = args.merge_into_config(defaults);
    let files = collect_files(&args.filepath, options.recursive, options.disable_filter)?;

    if files.is_empty() {
        return Err(Error::Upload(format!(
            "no supported files found in {}",
            args.filepath.display()
        )));
    }

    tracing::info!(
        "Uploading {} file(s) with {} thread(s)",
        files.len(),
        options.threads.max(1)
    );

    Ok(upload_files(api, files, &options).await)
}
