//! Investment domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::CacheEntity;

/// Risk level of an investment offering.
///
/// Ordered from lowest to highest: Low < Medium < High < VeryHigh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Returns the string representation of this risk level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::VeryHigh => "VERY_HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of an investment offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl InvestmentStatus {
    /// Returns the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Active => "ACTIVE",
            InvestmentStatus::Completed => "COMPLETED",
            InvestmentStatus::Paused => "PAUSED",
        }
    }
}

impl std::fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing an investment offering.
///
/// `total_invested` and `total_investors` are derived aggregates: they must
/// always equal a function of the holdings referencing this investment. The
/// server is authoritative for them; the reconciler may rewrite them locally
/// between fetches.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    /// Asset class tag used for portfolio grouping (e.g. "Real Estate").
    pub category: String,
    /// Owning sub-company, when the offering is scoped to one.
    pub company_id: Option<String>,
    pub risk_level: RiskLevel,
    pub status: InvestmentStatus,
    pub initial_amount: Decimal,
    pub current_value: Decimal,
    /// Lower bound for a single holding amount, when the offering sets one.
    pub min_investment: Option<Decimal>,
    /// Upper bound for a single holding amount, when the offering sets one.
    pub max_investment: Option<Decimal>,
    /// Projected return in percent.
    pub expected_roi: Decimal,
    /// Derived: sum of holding amounts referencing this investment.
    pub total_invested: Decimal,
    /// Derived: count of distinct investors holding this investment.
    pub total_investors: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Investment {
    /// Value appreciation since inception as a multiplier.
    ///
    /// Returns 1 when no positive baseline exists, so derived holding values
    /// degrade to their invested amount instead of collapsing to zero.
    pub fn appreciation_factor(&self) -> Decimal {
        if self.initial_amount > Decimal::ZERO {
            self.current_value / self.initial_amount
        } else {
            Decimal::ONE
        }
    }
}

impl CacheEntity for Investment {
    fn id(&self) -> &str {
        &self.id
    }
}
