//! Resolving a user query to one stored credential email.

use crate::error::{Error, Result};

/// Pick the stored email a query refers to.
///
/// An exact match wins outright. Otherwise every email containing the query
/// (case-insensitively) is a candidate, and there must be exactly one.
pub fn match_email<S: AsRef<str>>(emails: &[S], query: &str) -> Result<String> {
    if let Some(exact) = emails.iter().find(|e| e.as_ref() == query) {
        return Ok(exact.as_ref().to_string());
    }

    let candidates: Vec<String> = emails
        .iter()
        .map(AsRef::as_ref)
        .filter(|e| contains_ignore_case(e, query))
        .map(str::to_string)
        .collect();

    match candidates.len() {
        0 => Err(Error::NoCredentialMatch(query.to_string())),
        1 => Ok(candidates.into_iter().next().unwrap_or_default()),
        _ => Err(Error::AmbiguousCredential {
            query: query.to_string(),
            candidates,
        }),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
