//! Chunked concurrent fetching of path metadata and children
//!
//! One traversal level can hold many paths; fetching them one by one wastes
//! round trips, fetching them all at once can overwhelm a storage adapter.
//! The fetcher walks the level in fixed-size chunks, spawns every fetch in a
//! chunk concurrently, and awaits the whole chunk before starting the next.

use std::sync::Arc;

use color_eyre::Result;

use crate::entity::Entity;
use crate::storage::{Storage, StorageChildren};

/// Number of paths fetched concurrently per chunk
pub const FETCH_CHUNK_SIZE: usize = 10;

/// Result of fetching one path: the entity snapshot plus, for folders, the
/// immediate children. Consumed right away; never persisted.
#[derive(Debug, Clone)]
pub struct ListingBatch {
    pub entity: Entity,
    pub children: Option<StorageChildren>,
}

/// Fetch metadata (and children, for folders) for a single path.
///
/// Returns `Ok(None)` when the path does not exist in storage.
///
/// # Errors
/// Returns an error if a backend query fails.
pub async fn fetch_entry<S>(storage: &S, path: &str) -> Result<Option<ListingBatch>>
where
    S: Storage + ?Sized,
{
    let Some(meta) = storage.metadata(path).await? else {
        return Ok(None);
    };

    let children = if meta.kind.is_folder() {
        Some(storage.children(path).await?)
    } else {
        None
    };

    Ok(Some(ListingBatch {
        entity: Entity::from_metadata(path, &meta),
        children,
    }))
}

/// Fetch one whole traversal level with bounded parallelism.
///
/// Paths are processed in chunks of [`FETCH_CHUNK_SIZE`]; within a chunk all
/// fetches run concurrently, across chunks strictly in sequence. Per-path
/// outcomes are returned paired with their input path, in input order, so
/// the caller applies its own error policy.
///
/// # Errors
/// Returns an error only if a spawned fetch task panics or is aborted;
/// storage failures stay inside the per-path outcomes.
pub async fn fetch_level<S>(
    storage: &Arc<S>,
    paths: &[String],
) -> Result<Vec<(String, Result<Option<ListingBatch>>)>>
where
    S: Storage + ?Sized + 'static,
{
    let mut results = Vec::with_capacity(paths.len());

    for chunk in paths.chunks(FETCH_CHUNK_SIZE) {
        let mut handles = Vec::with_capacity(chunk.len());
        for path in chunk {
            let storage = Arc::clone(storage);
            let path = path.clone();
            handles.push((
                path.clone(),
                tokio::spawn(async move { fetch_entry(storage.as_ref(), &path).await }),
            ));
        }

        for (path, handle) in handles {
            results.push((path, handle.await?));
        }
    }

    Ok(results)
}
