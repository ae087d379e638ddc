//! Holding domain models.
//!
//! A holding is one investor's stake in one investment. Its `current_value`
//! is derived from the investment's appreciation; the amount must respect the
//! investment's min/max bounds when they are set.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::Investment;
use crate::store::CacheEntity;

/// Lifecycle status of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoldingStatus {
    #[default]
    Active,
    Withdrawn,
    Completed,
}

impl HoldingStatus {
    /// Returns the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            HoldingStatus::Active => "ACTIVE",
            HoldingStatus::Withdrawn => "WITHDRAWN",
            HoldingStatus::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for HoldingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing an investor's stake in an investment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub investor_id: String,
    pub investment_id: String,
    /// Amount originally invested.
    pub amount: Decimal,
    /// Derived: the stake's value after the investment's appreciation.
    pub current_value: Decimal,
    pub status: HoldingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    /// Derives this stake's value from the investment's appreciation.
    ///
    /// The mirrored `current_value` field is the server's last word; this is
    /// the same derivation applied to the locally cached investment.
    pub fn value_at(&self, investment: &Investment) -> Decimal {
        self.amount * investment.appreciation_factor()
    }
}

impl CacheEntity for Holding {
    fn id(&self) -> &str {
        &self.id
    }
}
