//! Blob storage for uploaded files.
//!
//! Uploads are written under `<root>/<kyc_id>/` with a name combining the
//! upload kind, a random token, and the sanitized original file name:
//! `<kind>_<token>_<name>`. The token makes names collision-free, so an
//! existing file is never overwritten.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::UploadKind;

/// Infrastructure trait for persisting uploaded bytes.
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Write `bytes` for the given session and kind, returning the stored
    /// path as a string.
    async fn store(
        &self,
        kyc_id: &str,
        kind: UploadKind,
        original_filename: &str,
        bytes: &[u8],
    ) -> io::Result<String>;
}

/// Filesystem-backed upload store.
pub struct FsUploadStore {
    root: PathBuf,
}

impl FsUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Strip directory components from a client-supplied file name so it can
/// never escape the session directory.
fn sanitize_filename(original: &str) -> String {
    Path::new(original)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty() && n != "." && n != "..")
        .unwrap_or_else(|| "upload".to_string())
}

#[async_trait]
impl UploadStore for FsUploadStore {
    async fn store(
        &self,
        kyc_id: &str,
        kind: UploadKind,
        original_filename: &str,
        bytes: &[u8],
    ) -> io::Result<String> {
        let dir = self.root.join(kyc_id);
        tokio::fs::create_dir_all(&dir).await?;

        let token = Uuid::new_v4().simple();
        let name = format!("{}_{}_{}", kind, token, sanitize_filename(original_filename));
        let dest = dir.join(name);

        tokio::fs::write(&dest, bytes).await?;
        tracing::debug!(kyc_id, kind = %kind, path = %dest.display(), "Stored upload");

        Ok(dest.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sanitize_strips_directory_components() {
        assert_eq!(sanitize_filename("selfie.jpg"), "selfie.jpg");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("/tmp/doc.png"), "doc.png");
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename(".."), "upload");
    }

    #[tokio::test]
    async fn store_writes_bytes_under_session_dir() {
        let tmp = TempDir::new().unwrap();
        let store = FsUploadStore::new(tmp.path());

        let path = store
            .store("abc123", UploadKind::Document, "passport.jpg", b"img-bytes")
            .await
            .unwrap();

        assert!(path.contains("abc123"));
        let name = Path::new(&path).file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("document_"));
        assert!(name.ends_with("_passport.jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), b"img-bytes");
    }

    #[tokio::test]
    async fn repeated_stores_never_collide() {
        let tmp = TempDir::new().unwrap();
        let store = FsUploadStore::new(tmp.path());

        let a = store
            .store("abc123", UploadKind::Selfie, "face.png", b"one")
            .await
            .unwrap();
        let b = store
            .store("abc123", UploadKind::Selfie, "face.png", b"two")
            .await
            .unwrap();

        assert_ne!(a, b);
        assert_eq!(std::fs::read(&a).unwrap(), b"one");
        assert_eq!(std::fs::read(&b).unwrap(), b"two");
    }
}
