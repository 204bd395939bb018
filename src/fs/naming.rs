//! Filename generation and validation.

use crate::error::{Error, Result};

/// Characters of the media key used in a synthesized filename.
const FALLBACK_KEY_CHARS: usize = 10;

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename names a directory or contains a path separator.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Filename for a media item whose remote name is unknown.
///
/// Uses the first ten characters of the key (all of it when shorter).
pub fn fallback_filename(media_key: &str) -> String {
    let prefix: String = media_key.chars().take(FALLBACK_KEY_CHARS).collect();
    format!("{}.jpg", prefix)
}

/// Local filename for a media item: the remote name if reported, else the fallback.
pub fn media_filename(remote_name: &str, media_key: &str) -> Result<String> {
    if remote_name.trim().is_empty() {
        return Ok(fallback_filename(media_key));
    }
    sanitize_filename(remote_name)
}

/// Default thumbnail output name for a media key.
pub fn thumbnail_filename(media_key: &str) -> String {
    format!("{}.jpg", media_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("IMG_0001.HEIC").unwrap(), "IMG_0001.HEIC");
        assert_eq!(
            sanitize_filename("Screenshot 12:30.png").unwrap(),
            "Screenshot 12_30.png"
        );
    }

    #[test]
    fn test_sanitize_filename_rejects_paths() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("dir/photo.jpg").is_err());
        assert!(sanitize_filename("dir\\photo.jpg").is_err());
        assert!(sanitize_filename("photo\0.jpg").is_err());
        assert!(sanitize_filename("   ").is_err());
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename(".").is_err());
    }

    #[test]
    fn test_sanitize_filename_allows_inner_dots() {
        assert_eq!(
            sanitize_filename("IMG..20240101.jpg").unwrap(),
            "IMG..20240101.jpg"
        );
        assert_eq!(sanitize_filename("..hidden").unwrap(), "..hidden");
    }

    #[test]
    fn test_fallback_uses_first_ten_chars() {
        assert_eq!(fallback_filename("AF1QipNx7hT0kLq9"), "AF1QipNx7h.jpg");
        assert_eq!(fallback_filename("short"), "short.jpg");
    }

    #[test]
    fn test_media_filename() {
        assert_eq!(media_filename("", "AF1QipNx7hT0kLq9").unwrap(), "AF1QipNx7h.jpg");
        assert_eq!(media_filename("PXL_1.mp4", "AF1QipNx7hT0kLq9").unwrap(), "PXL_1.mp4");
        assert!(media_filename("../x.jpg", "AF1QipNx7hT0kLq9").is_err());
    }

    #[test]
    fn test_thumbnail_filename() {
        assert_eq!(thumbnail_filename("AF1QipKey"), "AF1QipKey.jpg");
    }
}
