//! Domain event types.

use serde::{Deserialize, Serialize};

use crate::store::Domain;

/// Domain events published after data changes.
///
/// These events represent facts about collection changes. Consumers treat
/// them as "this domain changed, re-fetch if you care" - never as an ordered
/// log of mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Investments were created, updated, or deleted.
    InvestmentsChanged { investment_ids: Vec<String> },

    /// Holdings were created, updated, or deleted.
    HoldingsChanged { holding_ids: Vec<String> },

    /// Users were created, updated, or deleted.
    UsersChanged { user_ids: Vec<String> },

    /// Sub-companies were created, updated, or deleted.
    CompaniesChanged { company_ids: Vec<String> },

    /// Profit/loss records were created, updated, or deleted.
    ProfitLossChanged { record_ids: Vec<String> },
}

impl DomainEvent {
    /// Creates an InvestmentsChanged event.
    pub fn investments_changed(investment_ids: Vec<String>) -> Self {
        Self::InvestmentsChanged { investment_ids }
    }

    /// Creates a HoldingsChanged event.
    pub fn holdings_changed(holding_ids: Vec<String>) -> Self {
        Self::HoldingsChanged { holding_ids }
    }

    /// Creates a UsersChanged event.
    pub fn users_changed(user_ids: Vec<String>) -> Self {
        Self::UsersChanged { user_ids }
    }

    /// Creates a CompaniesChanged event.
    pub fn companies_changed(company_ids: Vec<String>) -> Self {
        Self::CompaniesChanged { company_ids }
    }

    /// Creates a ProfitLossChanged event.
    pub fn profit_loss_changed(record_ids: Vec<String>) -> Self {
        Self::ProfitLossChanged { record_ids }
    }

    /// Creates the change event for an arbitrary domain.
    pub fn for_domain(domain: Domain, ids: Vec<String>) -> Self {
        match domain {
            Domain::Investments => Self::investments_changed(ids),
            Domain::Holdings => Self::holdings_changed(ids),
            Domain::Users => Self::users_changed(ids),
            Domain::Companies => Self::companies_changed(ids),
            Domain::ProfitLoss => Self::profit_loss_changed(ids),
        }
    }

    /// The domain this event reports a change for.
    pub fn domain(&self) -> Domain {
        match self {
            Self::InvestmentsChanged { .. } => Domain::Investments,
            Self::HoldingsChanged { .. } => Domain::Holdings,
            Self::UsersChanged { .. } => Domain::Users,
            Self::CompaniesChanged { .. } => Domain::Companies,
            Self::ProfitLossChanged { .. } => Domain::ProfitLoss,
        }
    }

    /// The ids the change touched.
    pub fn changed_ids(&self) -> &[String] {
        match self {
            Self::InvestmentsChanged { investment_ids } => investment_ids,
            Self::HoldingsChanged { holding_ids } => holding_ids,
            Self::UsersChanged { user_ids } => user_ids,
            Self::CompaniesChanged { company_ids } => company_ids,
            Self::ProfitLossChanged { record_ids } => record_ids,
        }
    }
}
