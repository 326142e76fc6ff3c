//! vaultsync-core: Core enumeration engine
//!
//! Provides breadth-first listing of a vault's hidden configuration tree
//! over an abstract storage backend, allow-list pattern resolution, and the
//! sync-specific filtering rules.

pub mod config;
pub mod entity;
pub mod fetch;
pub mod pattern;
pub mod storage;
pub mod walk;

#[cfg(test)]
mod testutil;

pub use config::VaultConfig;
pub use entity::Entity;
pub use fetch::{FETCH_CHUNK_SIZE, ListingBatch, fetch_entry, fetch_level};
pub use pattern::{allowlist_roots, is_hidden_path, literal_prefix};
pub use storage::{EntryKind, Storage, StorageChildren, StorageMetadata};
pub use walk::{enumerate_config, enumerate_roots, is_reserved_name};
