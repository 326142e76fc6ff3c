//! vaultsync-storage: Storage adapters
//!
//! Concrete [`vaultsync_core::Storage`] backends. Currently only the local
//! filesystem adapter; a host application plugs in its own.

pub mod local;

pub use local::LocalStorage;
