//! Metrics result models.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::InvestmentStatus;

/// Bucket label for holdings whose investment cannot be resolved.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Headline portfolio aggregates for a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub total_profit: Decimal,
    pub total_loss: Decimal,
    pub net_profit: Decimal,
    /// Net profit over invested total, in percent.
    pub roi: Decimal,
    pub investment_count: usize,
    pub investor_count: usize,
    /// The snapshot instant these numbers derive from.
    pub as_of: DateTime<Utc>,
}

impl PortfolioMetrics {
    /// All-zero metrics for an empty scope.
    pub fn zero(as_of: DateTime<Utc>) -> Self {
        Self {
            total_value: Decimal::ZERO,
            total_invested: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            total_loss: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            roi: Decimal::ZERO,
            investment_count: 0,
            investor_count: 0,
            as_of,
        }
    }
}

/// Time bucketing scheme for performance trends.
///
/// Period keys are zero-padded so they sort correctly as strings within one
/// scheme; keys from different schemes are never compared with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Granularity {
    Month,
    Quarter,
    Year,
}

impl Granularity {
    /// The bucket key for an instant: `YYYY-MM`, `YYYY-Qn`, or `YYYY`.
    pub fn period_key(&self, at: DateTime<Utc>) -> String {
        match self {
            Granularity::Month => format!("{:04}-{:02}", at.year(), at.month()),
            Granularity::Quarter => {
                format!("{:04}-Q{}", at.year(), (at.month() - 1) / 3 + 1)
            }
            Granularity::Year => format!("{:04}", at.year()),
        }
    }
}

/// One period bucket of the performance trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: String,
    pub total_investment: Decimal,
    pub investment_count: usize,
    /// Profit minus loss recorded in the period.
    pub total_return: Decimal,
    /// Return over investment for the period, in percent.
    pub roi: Decimal,
}

/// One status group of the investment status distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: InvestmentStatus,
    pub count: usize,
    pub total_value: Decimal,
    pub percentage: Decimal,
}

/// One category group of an investor's portfolio distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub category: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_period_keys() {
        let at = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(Granularity::Month.period_key(at), "2026-03");
        assert_eq!(Granularity::Quarter.period_key(at), "2026-Q1");
        assert_eq!(Granularity::Year.period_key(at), "2026");

        let december = Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(Granularity::Quarter.period_key(december), "2026-Q4");
    }

    #[test]
    fn test_period_keys_sort_lexically_within_scheme() {
        let earlier = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        assert!(Granularity::Month.period_key(earlier) < Granularity::Month.period_key(later));
        assert!(Granularity::Quarter.period_key(earlier) < Granularity::Quarter.period_key(later));
    }
}
