//! Local filesystem storage adapter
//!
//! Backs the enumeration engine with a directory on disk. Keys are
//! vault-relative, slash-separated paths; the vault root itself is the empty
//! key. Useful for driving the engine from the CLI and for integration
//! tests, without the host application's own adapter.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use async_trait::async_trait;
use color_eyre::Result;

use vaultsync_core::{EntryKind, Storage, StorageChildren, StorageMetadata};

/// Storage over a local vault directory
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a storage adapter rooted at the given vault directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            self.root.clone()
        } else {
            self.root.join(trimmed)
        }
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn metadata(&self, path: &str) -> Result<Option<StorageMetadata>> {
        let meta = match tokio::fs::metadata(self.full_path(path)).await {
            Ok(meta) => meta,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let kind = if meta.is_dir() {
            EntryKind::Folder
        } else {
            EntryKind::File
        };
        let mtime = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as i64);

        Ok(Some(StorageMetadata {
            kind,
            mtime,
            size: meta.len(),
        }))
    }

    async fn children(&self, path: &str) -> Result<StorageChildren> {
        let base = path.trim_end_matches('/');
        let mut dir = tokio::fs::read_dir(self.full_path(path)).await?;
        let mut children = StorageChildren::default();

        while let Some(entry) = dir.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let child = if base.is_empty() {
                name
            } else {
                format!("{base}/{name}")
            };

            if entry.file_type().await?.is_dir() {
                children.folders.push(child);
            } else {
                children.files.push(child);
            }
        }

        // read_dir order is platform-dependent; sort for determinism
        children.folders.sort();
        children.files.sort();

        Ok(children)
    }
}
