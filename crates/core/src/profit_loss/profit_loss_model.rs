//! Profit/loss record domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::CacheEntity;

/// Reporting period of a profit/loss record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Period {
    /// Returns the string representation of this period.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "DAILY",
            Period::Weekly => "WEEKLY",
            Period::Monthly => "MONTHLY",
            Period::Quarterly => "QUARTERLY",
            Period::Yearly => "YEARLY",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing one period's realized performance, attached to
/// either an investment or a single holding.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossRecord {
    pub id: String,
    pub investment_id: Option<String>,
    pub holding_id: Option<String>,
    pub period: Period,
    pub profit: Decimal,
    pub loss: Decimal,
    pub net_amount: Decimal,
    /// Change over the period in percent.
    pub change_pct: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl CacheEntity for ProfitLossRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
