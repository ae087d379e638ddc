use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default collection cache lifetime before a re-fetch is required (5 minutes).
pub const DEFAULT_CACHE_MAX_AGE_MS: i64 = 300_000;

/// Window for coalescing bursts of repeated event publishes.
pub const DEFAULT_DEBOUNCE_MS: u64 = 1_000;

/// Consecutive refresh failures after which auto-refresh stops.
pub const DEFAULT_MAX_REFRESH_FAILURES: u32 = 5;

/// Comparison tolerance for recomputed monetary aggregates.
pub const AGGREGATE_TOLERANCE: Decimal = dec!(0.01);

/// An investment value below this fraction of its invested total is suspicious.
pub const VALUE_FLOOR_RATIO: Decimal = dec!(0.5);

/// A holding value below this fraction of its invested amount is suspicious.
pub const HOLDING_LOSS_RATIO: Decimal = dec!(0.3);
