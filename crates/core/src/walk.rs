//! Breadth-first tree enumeration over a storage backend
//!
//! Two policies share one traversal engine. [`enumerate_config`] lists a
//! vault's hidden configuration tree for syncing, filtering out the syncing
//! plugin's own private data (except its known files) and reserved workspace
//! entries, with an optional bookmarks-only early exit. [`enumerate_roots`]
//! lists everything reachable from a set of arbitrary roots, typically the
//! allow-listed hidden roots, tolerating unreadable entries.
//!
//! Both drain one full level before starting the next: the current level is
//! fetched in chunks, accepted children go into the next level's queue.

use std::sync::Arc;

use color_eyre::{Result, eyre::bail};
use tracing::debug;

use crate::entity::Entity;
use crate::fetch::fetch_level;
use crate::storage::Storage;

/// Reserved entries never enumerated from a config tree
pub const RESERVED_NAMES: [&str; 2] = ["workspace", "workspace.json"];

/// Files of the syncing plugin itself that stay in the listing
pub const PLUGIN_OWN_FILES: [&str; 5] = [
    "data.json",
    "main.js",
    "manifest.json",
    ".gitignore",
    "styles.css",
];

/// Bookmarks file the bookmarks-only mode is after
pub const BOOKMARKS_FILE: &str = "bookmarks.json";

/// Check whether a path equals a reserved entry or ends in one as a path
/// segment.
#[must_use]
pub fn is_reserved_name(name: &str, reserved: &[&str]) -> bool {
    reserved
        .iter()
        .any(|r| name == *r || name.ends_with(&format!("/{r}")))
}

fn is_inside_self_plugin(key: &str, plugin_id: &str) -> bool {
    key == plugin_id
        || key == format!("{plugin_id}/")
        || key.ends_with(&format!("/{plugin_id}"))
        || key.ends_with(&format!("/{plugin_id}/"))
}

fn is_plugin_own_file(name: &str) -> bool {
    PLUGIN_OWN_FILES
        .iter()
        .any(|f| name == *f || name.ends_with(&format!("/{f}")))
}

/// Trim roots, drop blanks, deduplicate preserving first-seen order
fn seed_roots(roots: &[String]) -> Vec<String> {
    let mut seeded: Vec<String> = Vec::with_capacity(roots.len());
    for root in roots {
        let root = root.trim();
        if root.is_empty() || seeded.iter().any(|s| s == root) {
            continue;
        }
        seeded.push(root.to_string());
    }
    seeded
}

/// Enumerate a vault's hidden configuration tree for syncing.
///
/// Walks breadth-first from `config_root`. Children named `workspace` or
/// `workspace.json` are never descended into; inside this plugin's own
/// folder (`plugin_id`) only the known plugin files survive. With
/// `bookmarks_only`, traversal stops after the first two levels and the
/// output keeps only the root folder and its `bookmarks.json`.
///
/// # Errors
/// Fails if any visited path has no metadata, or if a file reports a
/// missing/zero modification time. No partial results are returned.
pub async fn enumerate_config<S>(
    config_root: &str,
    storage: &Arc<S>,
    plugin_id: &str,
    bookmarks_only: bool,
) -> Result<Vec<Entity>>
where
    S: Storage + ?Sized + 'static,
{
    let config_root = config_root.trim().trim_end_matches('/');
    let mut output = Vec::new();
    let mut level = seed_roots(&[config_root.to_string()]);
    let mut round = 0usize;

    while !level.is_empty() {
        if bookmarks_only && round > 1 {
            break;
        }

        let mut next = Vec::new();
        for (path, outcome) in fetch_level(storage, &level).await? {
            let Some(batch) = outcome? else {
                bail!("something went wrong while listing hidden folder: no metadata for {path}");
            };

            let entity = batch.entity;
            if !entity.is_folder() && entity.mtime_client == 0 {
                bail!(
                    "file {} under {config_root} has a missing or zero modification time",
                    entity.key
                );
            }
            let inside_self = is_inside_self_plugin(&entity.key, plugin_id);
            output.push(entity);

            if let Some(children) = batch.children {
                for child in children.folders.iter().chain(children.files.iter()) {
                    if is_reserved_name(child, &RESERVED_NAMES) {
                        continue;
                    }
                    if inside_self && !is_plugin_own_file(child) {
                        continue;
                    }
                    next.push(child.clone());
                }
            }
        }

        level = next;
        round += 1;
    }

    if bookmarks_only {
        let root_key = format!("{config_root}/");
        let bookmarks_key = format!("{config_root}/{BOOKMARKS_FILE}");
        output.retain(|e| e.key == root_key || e.key == bookmarks_key);
    }

    Ok(output)
}

/// Enumerate everything reachable from a set of arbitrary roots.
///
/// Same breadth-first engine as [`enumerate_config`] but with no filtering:
/// every discovered child is followed. Unreadable entries (no metadata, or
/// a failed query) are dropped instead of failing the call, as are files
/// without a usable modification time.
///
/// # Errors
/// Only fails if a spawned fetch task panics; storage failures never
/// propagate.
pub async fn enumerate_roots<S>(roots: &[String], storage: &Arc<S>) -> Result<Vec<Entity>>
where
    S: Storage + ?Sized + 'static,
{
    let mut output = Vec::new();
    let mut level = seed_roots(roots);

    while !level.is_empty() {
        let mut next = Vec::new();
        for (path, outcome) in fetch_level(storage, &level).await? {
            let batch = match outcome {
                Ok(Some(batch)) => batch,
                Ok(None) => {
                    debug!(path = %path, "dropping entry without metadata");
                    continue;
                }
                Err(err) => {
                    debug!(path = %path, error = %err, "dropping unreadable entry");
                    continue;
                }
            };

            if let Some(children) = &batch.children {
                next.extend(children.folders.iter().cloned());
                next.extend(children.files.iter().cloned());
            }

            if batch.entity.is_folder() || batch.entity.mtime_client != 0 {
                output.push(batch.entity);
            } else {
                debug!(path = %path, "dropping file without modification time");
            }
        }

        level = next;
    }

    Ok(output)
}
