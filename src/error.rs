//! Error types for the gotohp client.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Credential errors
    #[error("invalid auth string: {0}")]
    InvalidAuthString(String),

    #[error("no credentials configured, run 'gotohp creds add <auth-string>' first")]
    NoCredentials,

    #[error("credentials for {0} already exist")]
    CredentialExists(String),

    #[error("no credentials found for {0}")]
    CredentialNotFound(String),

    #[error("no credentials found matching '{0}'")]
    NoCredentialMatch(String),

    #[error(
        "multiple credentials match '{query}':\n{}\nPlease be more specific",
        .candidates.iter().map(|c| format!("  - {}", c)).collect::<Vec<_>>().join("\n")
    )]
    AmbiguousCredential {
        query: String,
        candidates: Vec<String>,
    },

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("{0} is not supported by this client (requires the private Google Photos protocol)")]
    Unsupported(&'static str),

    #[error("no download URL available for {0}")]
    NoDownloadUrl(String),

    // Transfer errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    // File system errors
    #[error("file or directory does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// An inner error with a one-line description of the step that failed.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Attach a context line to a failing result.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
