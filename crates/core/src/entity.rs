//! Entity: one discovered file or folder and its metadata

use serde::{Deserialize, Serialize};

use crate::storage::{EntryKind, StorageMetadata};

/// A discovered filesystem object.
///
/// `key` is the canonical path: folders always carry a trailing `/`, files
/// never do. `key_raw` preserves the pre-normalization form (currently
/// identical to `key`). Both mtime fields carry the same source timestamp in
/// epoch milliseconds; 0 means the backend reported none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub key: String,
    pub key_raw: String,
    pub mtime_client: i64,
    pub mtime_server: i64,
    pub size: u64,
    pub size_raw: u64,
}

impl Entity {
    /// Build an entity from a fetched path and its metadata.
    ///
    /// Normalizes the key so a folder ends with exactly one `/`.
    #[must_use]
    pub fn from_metadata(path: &str, meta: &StorageMetadata) -> Self {
        let key = match meta.kind {
            EntryKind::Folder if !path.ends_with('/') => format!("{path}/"),
            _ => path.to_string(),
        };
        let mtime = meta.mtime.unwrap_or(0);

        Self {
            key_raw: key.clone(),
            key,
            mtime_client: mtime,
            mtime_server: mtime,
            size: meta.size,
            size_raw: meta.size,
        }
    }

    /// Check if this entity is a folder (trailing slash on the key)
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.key.ends_with('/')
    }
}
