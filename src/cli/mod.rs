//! Command-line interface definitions.

pub mod args;

pub use args::{
    normalize_args, parse_args, Cli, Command, CredentialsCommand, DownloadArgs, GetUrlsArgs,
    LogLevel, ParseExit, ThumbnailArgs, UploadArgs,
};
