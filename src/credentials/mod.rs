//! Stored credential handling.
//!
//! Provides:
//! - Auth string parsing
//! - Email matching for account selection

pub mod auth_string;
pub mod matching;

pub use auth_string::{email_from_auth_string, parse_auth_string, AuthParams, EMAIL_KEY};
pub use matching::match_email;

/// A stored credential as seen when listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialEntry {
    Valid { email: String },
    Invalid,
}

impl CredentialEntry {
    pub fn from_auth_string(auth: &str) -> Self {
        match email_from_auth_string(auth) {
            Ok(email) => CredentialEntry::Valid { email },
            Err(_) => CredentialEntry::Invalid,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            CredentialEntry::Valid { email } => Some(email),
            CredentialEntry::Invalid => None,
        }
    }

    pub fn into_email(self) -> Option<String> {
        match self {
            CredentialEntry::Valid { email } => Some(email),
            CredentialEntry::Invalid => None,
        }
    }
}
