//! Entity cache store - the owned mirror of server-side collections.
//!
//! This module provides:
//! - `CollectionState` - per-collection items, loading flag, error, timestamp
//! - `Collection` - the shared handle mediating all collection mutations
//! - `CacheStore` - one handle per domain plus snapshot extraction
//! - `Snapshot` - the immutable point-in-time view consumed by derivations

mod snapshot_model;
mod store_model;
mod store_service;

pub use snapshot_model::Snapshot;
pub use store_model::{CacheEntity, CollectionState, Domain};
pub use store_service::{CacheStore, Collection};
