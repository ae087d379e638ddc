//! Metrics engine - pure financial derivations over a snapshot.
//!
//! Every function here is synchronous, referentially transparent, and total:
//! no I/O, no mutation of the snapshot, and an empty snapshot is a valid
//! zero-result input. Ratios are zero-guarded throughout.

mod metrics_model;
mod metrics_service;

pub use metrics_model::{
    AllocationSlice, Granularity, PortfolioMetrics, StatusSlice, TrendPoint, UNKNOWN_CATEGORY,
};
pub use metrics_service::{
    calculate_metrics, calculate_performance_trend, calculate_portfolio_distribution,
    calculate_roi, calculate_status_distribution, calculate_total_value,
};

#[cfg(test)]
mod metrics_service_tests;
