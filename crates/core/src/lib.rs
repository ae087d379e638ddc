//! InvestHub Core - the client-side data and analytics layer.
//!
//! This crate owns the cached mirror of the server's domain collections and
//! everything derived from it: portfolio metrics, consistency validation,
//! local reconciliation of derived aggregates, and the event bus that keeps
//! concurrently open views in sync. It performs no I/O itself - fetching and
//! mutating entities is the HTTP collaborator's job, injected at the seams.

pub mod companies;
pub mod consistency;
pub mod constants;
pub mod errors;
pub mod events;
pub mod holdings;
pub mod investments;
pub mod metrics;
pub mod profit_loss;
pub mod store;
pub mod users;

// Re-export the types most callers need
pub use store::{CacheStore, Collection, Domain, Snapshot};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
