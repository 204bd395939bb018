//! Command-line argument definitions using clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::api::{UploadOptions, UrlVariant};
use crate::config::UploadConfig;
use crate::error::exit_codes;

/// Google Photos unofficial client.
#[derive(Parser, Debug)]
#[command(
    name = "gotohp",
    about = "gotohp - Google Photos unofficial client",
    disable_version_flag = true,
    arg_required_else_help = true,
    after_help = "Run 'gotohp <command> --help' for more information on a command"
)]
pub struct Cli {
    /// Path to config file.
    #[arg(short, long, global = true, env = "GOTOHP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload a file to Google Photos
    Upload(UploadArgs),

    /// Download a media file by its key
    Download(DownloadArgs),

    /// Get download URLs for a media item
    #[command(name = "get-urls")]
    GetUrls(GetUrlsArgs),

    /// Download a thumbnail for a media item
    Thumbnail(ThumbnailArgs),

    /// Manage Google Photos credentials
    #[command(
        visible_alias = "creds",
        subcommand_required = true,
        arg_required_else_help = true
    )]
    Credentials {
        #[command(subcommand)]
        command: CredentialsCommand,
    },

    /// Show version information
    Version,
}

/// Arguments for `upload`.
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// File or directory to upload.
    pub filepath: PathBuf,

    /// Include subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Number of upload threads (default: 3).
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Force upload even if file exists.
    #[arg(short, long)]
    pub force: bool,

    /// Delete from host after upload.
    #[arg(short, long)]
    pub delete: bool,

    /// Disable file type filtering (short form: -df).
    #[arg(long)]
    pub disable_filter: bool,

    /// Log level.
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl UploadArgs {
    /// Merge these flags over the configured upload defaults.
    pub fn merge_into_config(&self, defaults: &UploadConfig) -> UploadOptions {
        UploadOptions {
            threads: self.threads.unwrap_or(defaults.threads),
            recursive: self.recursive || defaults.recursive,
            force: self.force || defaults.force,
            delete_from_host: self.delete || defaults.delete_from_host,
            disable_filter: self.disable_filter || defaults.disable_filter,
        }
    }
}

/// Arguments for `download`.
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Media key of the item.
    pub media_key: String,

    /// Output file path (default: <media-key> in the current directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Download original file (default).
    #[arg(long, overrides_with = "edited")]
    pub original: bool,

    /// Download edited version (if available).
    #[arg(long, overrides_with = "original")]
    pub edited: bool,
}

impl DownloadArgs {
    pub fn variant(&self) -> UrlVariant {
        if self.edited {
            UrlVariant::Edited
        } else {
            UrlVariant::Original
        }
    }
}

/// Arguments for `get-urls`.
#[derive(Args, Debug)]
pub struct GetUrlsArgs {
    /// Media key of the item.
    pub media_key: String,
}

/// Arguments for `thumbnail`.
#[derive(Args, Debug)]
pub struct ThumbnailArgs {
    /// Media key of the item.
    pub media_key: String,

    /// Output file path (default: <media-key>.jpg).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Thumbnail width in pixels.
    #[arg(short, long, default_value_t = 0)]
    pub width: u32,

    /// Thumbnail height in pixels.
    #[arg(long, default_value_t = 0)]
    pub height: u32,

    /// Remove overlay (e.g., play button for videos).
    #[arg(long)]
    pub no_overlay: bool,
}

#[derive(Subcommand, Debug)]
pub enum CredentialsCommand {
    /// Add a new credential
    Add {
        /// Auth string captured from an Android login.
        auth_string: String,
    },

    /// Remove a credential by email
    #[command(visible_alias = "rm")]
    Remove {
        /// Email of the credential to remove.
        email: String,
    },

    /// List all credentials
    #[command(visible_alias = "ls")]
    List,

    /// Set active credential (supports partial matching)
    #[command(visible_alias = "select")]
    Set {
        /// Email or part of it.
        email: String,
    },
}

/// Log verbosity for the upload command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Cli {
    /// Default tracing filter for the parsed command.
    pub fn log_filter(&self) -> &'static str {
        match &self.command {
            Command::Upload(args) => args.log_level.as_filter(),
            _ => "warn",
        }
    }
}

/// Why parsing stopped short of a runnable command.
#[derive(Debug)]
pub struct ParseExit {
    /// Text to show the user.
    pub message: String,
    pub code: i32,
}

impl ParseExit {
    /// Whether the text belongs on stdout (help) rather than stderr.
    pub fn is_success(&self) -> bool {
        self.code == exit_codes::SUCCESS
    }
}

/// Rewrite tokens clap cannot express directly.
///
/// `-df` is a two-letter short flag of `upload` and is only rewritten after
/// that subcommand. `-v`/`--version` in first position name the `version`
/// command.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    // Whether the subcommand is `upload`, once it has been seen.
    let mut in_upload: Option<bool> = None;
    let mut config_value_next = false;
    let mut normalized = Vec::new();

    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 {
            normalized.push(arg);
            continue;
        }

        if in_upload.is_none() {
            if config_value_next {
                config_value_next = false;
            } else if arg == "-c" || arg == "--config" {
                config_value_next = true;
            } else if i == 1 && (arg == "-v" || arg == "--version") {
                normalized.push(OsString::from("version"));
                continue;
            } else if !arg.to_string_lossy().starts_with('-') {
                in_upload = Some(arg == "upload");
            }
        } else if in_upload == Some(true) && arg == "-df" {
            normalized.push(OsString::from("--disable-filter"));
            continue;
        }

        normalized.push(arg);
    }

    normalized
}

/// Parse process arguments.
///
/// Help requests succeed with exit code 0. Any other failure, including an
/// unknown command or subcommand, carries the error and the relevant help
/// text with exit code 1.
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, ParseExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = normalize_args(args);

    Cli::try_parse_from(&args).map_err(|e| {
        use clap::error::ErrorKind;

        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseExit {
                message: e.render().to_string(),
                code: exit_codes::SUCCESS,
            },
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseExit {
                message: e.render().to_string(),
                code: exit_codes::FAILURE,
            },
            _ => ParseExit {
                message: format!("{}\n{}", e.render(), help_for(&args)),
                code: exit_codes::FAILURE,
            },
        }
    })
}

/// Help text for the deepest command named in `args`.
fn help_for(args: &[OsString]) -> String {
    let mut command = Cli::command();
    let name = args.get(1).and_then(|a| a.to_str()).unwrap_or_default();

    let sub = command
        .get_subcommands()
        .find(|c| c.get_name() == name || c.get_all_aliases().any(|a| a == name))
        .map(|c| c.get_name().to_string());

    match sub {
        Some(sub) if sub == "credentials" => command
            .find_subcommand_mut(&sub)
            .map(|c| c.render_help().to_string())
            .unwrap_or_default(),
        _ => command.render_help().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, ParseExit> {
        parse_args(std::iter::once("gotohp").chain(args.iter().copied()))
    }

    #[test]
    fn test_upload_flags() {
        let cli = parse(&["upload", "photos", "-r", "-t", "5", "-d", "-df", "-l", "debug"]).unwrap();
        match cli.command {
            Command::Upload(args) => {
                assert_eq!(args.filepath, PathBuf::from("photos"));
                assert!(args.recursive);
                assert_eq!(args.threads, Some(5));
                assert!(args.delete);
                assert!(args.disable_filter);
                assert!(!args.force);
                assert_eq!(args.log_level, LogLevel::Debug);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_disable_filter_is_not_delete_and_force() {
        let cli = parse(&["upload", "photos", "-df"]).unwrap();
        match cli.command {
            Command::Upload(args) => {
                assert!(args.disable_filter);
                assert!(!args.delete);
                assert!(!args.force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_df_is_only_rewritten_for_upload() {
        let args = normalize_args(["gotohp", "download", "AF1QipKey", "-o", "-df"]);
        assert_eq!(args[4], OsString::from("-df"));

        let args = normalize_args(["gotohp", "get-urls", "-df"]);
        assert_eq!(args[2], OsString::from("-df"));

        let args = normalize_args(["gotohp", "-c", "gotohp.toml", "upload", "photos", "-df"]);
        assert_eq!(args[5], OsString::from("--disable-filter"));
    }

    #[test]
    fn test_merge_upload_defaults() {
        let cli = parse(&["upload", "photos", "-f"]).unwrap();
        let Command::Upload(args) = cli.command else {
            panic!("expected upload");
        };
        let defaults = UploadConfig {
            threads: 6,
            recursive: true,
            ..Default::default()
        };
        let opts = args.merge_into_config(&defaults);
        assert_eq!(opts.threads, 6);
        assert!(opts.recursive);
        assert!(opts.force);
        assert!(!opts.delete_from_host);
    }

    #[test]
    fn test_download_variant_last_flag_wins() {
        let cli = parse(&["download", "KEY", "--edited", "--original"]).unwrap();
        let Command::Download(args) = cli.command else {
            panic!("expected download");
        };
        assert_eq!(args.variant(), UrlVariant::Original);

        let cli = parse(&["download", "KEY", "--original", "--edited", "-o", "out.bin"]).unwrap();
        let Command::Download(args) = cli.command else {
            panic!("expected download");
        };
        assert_eq!(args.variant(), UrlVariant::Edited);
        assert_eq!(args.output, Some(PathBuf::from("out.bin")));
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = parse(&["get-urls", "KEY", "-c", "/tmp/alt.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/alt.toml")));
        assert!(matches!(cli.command, Command::GetUrls(_)));
    }

    #[test]
    fn test_thumbnail_dimensions() {
        let cli = parse(&["thumbnail", "KEY", "-w", "320", "--height", "240", "--no-overlay"]).unwrap();
        let Command::Thumbnail(args) = cli.command else {
            panic!("expected thumbnail");
        };
        assert_eq!((args.width, args.height), (320, 240));
        assert!(args.no_overlay);

        let err = parse(&["thumbnail", "KEY", "-w", "wide"]).unwrap_err();
        assert_eq!(err.code, exit_codes::FAILURE);
    }

    #[test]
    fn test_credentials_aliases() {
        let cli = parse(&["creds", "rm", "a@x.com"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Credentials {
                command: CredentialsCommand::Remove { .. }
            }
        ));

        let cli = parse(&["credentials", "select", "alice"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Credentials {
                command: CredentialsCommand::Set { .. }
            }
        ));

        let cli = parse(&["creds", "ls"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Credentials {
                command: CredentialsCommand::List
            }
        ));
    }

    #[test]
    fn test_unknown_command_fails_with_help() {
        let err = parse(&["frobnicate"]).unwrap_err();
        assert_eq!(err.code, exit_codes::FAILURE);
        assert!(err.message.contains("get-urls"));
        assert!(err.message.contains("Commands:"));
    }

    #[test]
    fn test_unknown_credentials_subcommand_fails_with_help() {
        let err = parse(&["creds", "bogus"]).unwrap_err();
        assert_eq!(err.code, exit_codes::FAILURE);
        assert!(err.message.contains("select"));
    }

    #[test]
    fn test_missing_arguments_fail() {
        assert_eq!(parse(&[]).unwrap_err().code, exit_codes::FAILURE);
        assert_eq!(parse(&["creds"]).unwrap_err().code, exit_codes::FAILURE);
        assert_eq!(parse(&["download"]).unwrap_err().code, exit_codes::FAILURE);
    }

    #[test]
    fn test_help_succeeds() {
        let err = parse(&["--help"]).unwrap_err();
        assert!(err.is_success());
        assert!(parse(&["help"]).unwrap_err().is_success());
    }

    #[test]
    fn test_version_aliases() {
        for flag in ["version", "-v", "--version"] {
            assert!(matches!(parse(&[flag]).unwrap().command, Command::Version));
        }
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(parse(&["upload", "x"]).unwrap().log_filter(), "info");
        assert_eq!(parse(&["get-urls", "x"]).unwrap().log_filter(), "warn");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
