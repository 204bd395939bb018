//! Auth string parsing.
//!
//! An auth string is the query-string encoded parameter set captured from an
//! Android Google account login, e.g.
//! `androidId=...&Email=user%40gmail.com&Token=...`.

use url::form_urlencoded;

use crate::error::{Error, Result};

/// Parameter holding the account email.
pub const EMAIL_KEY: &str = "Email";

/// Key/value parameters decoded from an auth string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthParams {
    pairs: Vec<(String, String)>,
}

impl AuthParams {
    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The account email, if present and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.get(EMAIL_KEY).filter(|e| !e.is_empty())
    }
}

/// Parse an auth string into its parameters.
///
/// Rejects empty input, `;` separators and malformed percent escapes.
pub fn parse_auth_string(auth: &str) -> Result<AuthParams> {
    let auth = auth.trim();
    if auth.is_empty() {
        return Err(Error::InvalidAuthString("auth string is empty".to_string()));
    }

    if auth.contains(';') {
        return Err(Error::InvalidAuthString(
            "invalid semicolon separator".to_string(),
        ));
    }

    validate_escapes(auth)?;

    let pairs: Vec<(String, String)> = form_urlencoded::parse(auth.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .filter(|(k, _)| !k.is_empty())
        .collect();

    if pairs.is_empty() {
        return Err(Error::InvalidAuthString(
            "no parameters found".to_string(),
        ));
    }

    Ok(AuthParams { pairs })
}

/// Parse an auth string and return the email it belongs to.
pub fn email_from_auth_string(auth: &str) -> Result<String> {
    let params = parse_auth_string(auth)?;
    params
        .email()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidAuthString(format!("missing {} parameter", EMAIL_KEY)))
}

fn validate_escapes(auth: &str) -> Result<()> {
    let bytes = auth.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(Error::InvalidAuthString(format!(
                    "invalid URL escape \"{}\"",
                    String::from_utf8_lossy(&bytes[i..end])
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
