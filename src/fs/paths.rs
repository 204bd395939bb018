//! Path and directory management.

use std::ffi::OsString;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use directories::UserDirs;
use futures::{pin_mut, Stream, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Directory the media browser downloads into: `~/Downloads/gotohp`.
pub fn default_download_dir() -> Result<PathBuf> {
    let dirs = UserDirs::new()
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;
    Ok(dirs.home_dir().join("Downloads").join("gotohp"))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write downloaded bytes to `path`, replacing any existing file.
pub async fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    tokio::fs::write(path, data).await?;
    tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Sibling path a download is streamed into before it is renamed into place.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(OsString::new);
    name.push(".part");
    path.with_file_name(name)
}

/// Stream chunks into `path`, returning the number of bytes written.
///
/// Data goes to a `.part` file first and is renamed over `path` only once the
/// stream ends cleanly. On a stream or write error the partial file is removed
/// and `path` is left untouched.
pub async fn write_stream<S, B, E>(
    path: &Path,
    stream: S,
    mut on_progress: impl FnMut(u64),
) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let partial = partial_path(path);

    let written = async {
        pin_mut!(stream);
        let mut file = File::create(&partial).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            let bytes = chunk.as_ref();
            file.write_all(bytes).await?;
            written += bytes.len() as u64;
            on_progress(written);
        }
        file.flush().await?;
        Ok::<u64, Error>(written)
    }
    .await;

    match written {
        Ok(written) => {
            tokio::fs::rename(&partial, path).await?;
            Ok(written)
        }
        Err(e) => {
            if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                tracing::debug!("Could not remove {}: {}", partial.display(), cleanup);
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_download_dir_layout() {
        let dir = default_download_dir().unwrap();
        assert!(dir.ends_with(Path::new("Downloads").join("gotohp")));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();
    }

    #[tokio::test]
    async fn test_write_output_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.jpg");
        write_output(&path, b"first").await.unwrap();
        write_output(&path, b"second").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_partial_path_is_sibling() {
        let path = Path::new("/tmp/gotohp/PXL_1.mp4");
        assert_eq!(partial_path(path), Path::new("/tmp/gotohp/PXL_1.mp4.part"));
    }

    #[tokio::test]
    async fn test_write_stream_renames_on_success() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clip.mp4");
        let chunks = futures::stream::iter(vec![
            Ok::<_, String>(b"abc".to_vec()),
            Ok(b"def".to_vec()),
        ]);

        let mut seen = Vec::new();
        let written = write_stream(&path, chunks, |n| seen.push(n)).await.unwrap();
        assert_eq!(written, 6);
        assert_eq!(seen, vec![3, 6]);
        assert_eq!(std::fs::read(&path).unwrap(), b"abcdef");
        assert!(!partial_path(&path).exists());
    }

    #[tokio::test]
    async fn test_write_stream_error_leaves_no_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clip.mp4");
        let chunks = futures::stream::iter(vec![
            Ok(b"abc".to_vec()),
            Err("connection reset".to_string()),
        ]);

        let err = write_stream(&path, chunks, |_| {}).await.unwrap_err();
        assert!(matches!(err, Error::Download(_)));
        assert!(!path.exists());
        assert!(!partial_path(&path).exists());
    }

    #[tokio::test]
    async fn test_write_stream_error_keeps_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clip.mp4");
        std::fs::write(&path, b"previous").unwrap();
        let chunks = futures::stream::iter(vec![Err::<Vec<u8>, _>("timeout".to_string())]);

        assert!(write_stream(&path, chunks, |_| {}).await.is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
    }
}
