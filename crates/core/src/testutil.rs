//! In-memory storage fixture for traversal tests

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use color_eyre::{Result, eyre::bail};

use crate::storage::{EntryKind, Storage, StorageChildren, StorageMetadata};

/// In-memory `Storage` built from a flat map of slash-separated paths.
///
/// Children are derived from the path structure, so fixtures only declare
/// the entries themselves. `ghost` entries show up in a parent's child list
/// but have no metadata (simulating an entry that vanished between the list
/// and the stat); `failing` entries error on the metadata query itself.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, StorageMetadata>,
    ghosts: BTreeSet<String>,
    failing: BTreeSet<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(mut self, path: &str) -> Self {
        self.entries.insert(
            path.to_string(),
            StorageMetadata {
                kind: EntryKind::Folder,
                mtime: None,
                size: 0,
            },
        );
        self
    }

    pub fn file(mut self, path: &str, mtime: i64, size: u64) -> Self {
        self.entries.insert(
            path.to_string(),
            StorageMetadata {
                kind: EntryKind::File,
                mtime: (mtime != 0).then_some(mtime),
                size,
            },
        );
        self
    }

    /// A file with no modification time at all
    pub fn file_without_mtime(mut self, path: &str, size: u64) -> Self {
        self.entries.insert(
            path.to_string(),
            StorageMetadata {
                kind: EntryKind::File,
                mtime: None,
                size,
            },
        );
        self
    }

    /// Listed as a child of its parent, but `metadata` returns `None`
    pub fn ghost(mut self, path: &str) -> Self {
        self.ghosts.insert(path.to_string());
        self
    }

    /// `metadata` returns an error for this path
    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }
}

fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn metadata(&self, path: &str) -> Result<Option<StorageMetadata>> {
        let key = path.trim_end_matches('/');
        if self.failing.contains(key) {
            bail!("storage backend failure for {key}");
        }
        Ok(self.entries.get(key).cloned())
    }

    async fn children(&self, path: &str) -> Result<StorageChildren> {
        let base = path.trim_end_matches('/');
        let mut children = StorageChildren::default();

        for (key, meta) in &self.entries {
            if parent_of(key) == Some(base) {
                match meta.kind {
                    EntryKind::Folder => children.folders.push(key.clone()),
                    EntryKind::File => children.files.push(key.clone()),
                }
            }
        }
        for ghost in &self.ghosts {
            if parent_of(ghost) == Some(base) {
                children.files.push(ghost.clone());
            }
        }
        for failing in &self.failing {
            if parent_of(failing) == Some(base) {
                children.files.push(failing.clone());
            }
        }

        Ok(children)
    }
}
