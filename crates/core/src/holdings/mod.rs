//! Holdings module - investor stakes mirrored from the server.

mod holdings_model;

pub use holdings_model::{Holding, HoldingStatus};
