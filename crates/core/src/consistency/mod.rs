//! Consistency checking and reconciliation.
//!
//! The validator detects - without repairing - violations of the snapshot's
//! referential and numeric invariants; the reconciler recomputes the derived
//! investment aggregates so views read self-consistent numbers between
//! server round-trips. Both share one rollup formula so a reconciled
//! snapshot always validates cleanly on the aggregate checks.

mod consistency_model;
mod reconciler;
mod rollup;
mod validator;

pub use consistency_model::ConsistencyReport;
pub use reconciler::reconcile;
pub use validator::validate;
