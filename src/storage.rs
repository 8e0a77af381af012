//! Blob storage - filesystem-backed object store for uploaded models

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Bucket that holds uploaded model blobs
pub const MODELS_BUCKET: &str = "models";

/// Build the object key for an uploaded file: `<uuid>-<original filename>`.
///
/// Only the final path component of the client-supplied filename is kept;
/// multipart filenames are attacker-controlled.
pub fn object_key(original_name: &str) -> String {
    let base = Path::new(original_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("model.bin");
    format!("{}-{}", Uuid::new_v4(), base)
}

/// Filesystem-backed store for the `models` bucket.
#[derive(Debug, Clone)]
pub struct ModelStore {
    bucket_dir: PathBuf,
}

impl ModelStore {
    pub fn new(storage_root: &Path) -> Self {
        Self {
            bucket_dir: storage_root.join(MODELS_BUCKET),
        }
    }

    /// Write a blob under `key`. Fails if the key already exists
    /// (no upsert), matching object-store semantics.
    pub async fn put(&self, key: &str, contents: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.bucket_dir).await?;

        let path = self.bucket_dir.join(key);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(contents).await?;
        file.flush().await?;

        Ok(path)
    }
}
