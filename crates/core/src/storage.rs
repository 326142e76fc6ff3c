//! Abstract storage backend consumed by the enumeration engine
//!
//! The engine never touches a filesystem directly; it only issues read-only
//! `metadata` and `children` queries against this trait. Any hierarchical
//! store (local folder, virtual vault adapter) can implement it.

use async_trait::async_trait;
use color_eyre::Result;
use serde::{Deserialize, Serialize};

/// Kind of a storage entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    /// Check if this is a folder
    #[must_use]
    pub fn is_folder(self) -> bool {
        matches!(self, Self::Folder)
    }
}

/// Metadata snapshot for one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageMetadata {
    /// File or folder
    pub kind: EntryKind,
    /// Modification time in epoch milliseconds, if the backend reports one
    pub mtime: Option<i64>,
    /// Size in bytes (0 for folders on backends that don't report it)
    pub size: u64,
}

/// Immediate children of a folder, split by kind.
///
/// Entries are full paths usable directly as the next fetch key, not bare
/// names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageChildren {
    pub folders: Vec<String>,
    pub files: Vec<String>,
}

/// Read-only listing capability over a hierarchical store.
///
/// Both operations must be idempotent and side-effect-free; the engine may
/// issue several of them concurrently against the same handle.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch metadata for a path.
    ///
    /// Returns `Ok(None)` when the path does not exist.
    ///
    /// # Errors
    /// Returns an error if the backend query itself fails.
    async fn metadata(&self, path: &str) -> Result<Option<StorageMetadata>>;

    /// List the immediate children of a folder.
    ///
    /// Only called for paths whose metadata reported [`EntryKind::Folder`].
    ///
    /// # Errors
    /// Returns an error if the backend query fails.
    async fn children(&self, path: &str) -> Result<StorageChildren>;
}
