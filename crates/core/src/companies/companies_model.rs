//! Sub-company domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::CacheEntity;

/// Domain model representing a sub-company an admin operates under.
///
/// The aggregate fields mirror server-derived values and can lag behind the
/// cached investments and holdings. Fresh numbers for a company come from
/// `metrics::calculate_metrics` scoped to its id; the reconciler deliberately
/// leaves these mirrors alone.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub total_investments: u32,
    pub total_investors: u32,
    pub total_value: Decimal,
    pub total_profit: Decimal,
    pub total_loss: Decimal,
    /// Return in percent, as last computed by the server.
    pub roi: Decimal,
    pub created_at: DateTime<Utc>,
}

impl CacheEntity for Company {
    fn id(&self) -> &str {
        &self.id
    }
}
