//! Investments module - offering models mirrored from the server.

mod investments_model;

pub use investments_model::{Investment, InvestmentStatus, RiskLevel};
