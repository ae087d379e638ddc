//! Snapshot - the immutable point-in-time view of all cached collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::companies::Company;
use crate::holdings::Holding;
use crate::investments::Investment;
use crate::profit_loss::ProfitLossRecord;
use crate::users::User;

/// Point-in-time copy of every cached collection.
///
/// Metrics, validation, and reconciliation all read from a snapshot and never
/// write back into it; the cache store is the only owner of mutable state.
/// An empty snapshot is a valid input to every derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub investments: Vec<Investment>,
    pub holdings: Vec<Holding>,
    pub users: Vec<User>,
    pub companies: Vec<Company>,
    pub profit_loss: Vec<ProfitLossRecord>,
    pub taken_at: DateTime<Utc>,
}

impl Snapshot {
    /// Looks up an investment by id.
    pub fn investment(&self, id: &str) -> Option<&Investment> {
        self.investments.iter().find(|i| i.id == id)
    }

    /// Looks up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// True when every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
            && self.holdings.is_empty()
            && self.users.is_empty()
            && self.companies.is_empty()
            && self.profit_loss.is_empty()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            investments: Vec::new(),
            holdings: Vec::new(),
            users: Vec::new(),
            companies: Vec::new(),
            profit_loss: Vec::new(),
            taken_at: Utc::now(),
        }
    }
}
