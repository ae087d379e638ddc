//! Cache store data structures.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An entity that can live in a cached collection.
///
/// The id is the upsert/remove key; every mirrored domain model implements
/// this.
pub trait CacheEntity: Clone + Send + Sync + 'static {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &str;
}

/// The cached domain collections.
///
/// Doubles as the event kind on the propagation bus: a published event says
/// "this domain changed, re-fetch if you care".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Investments,
    Holdings,
    Users,
    Companies,
    ProfitLoss,
}

impl Domain {
    /// All cached domains, in fetch order.
    pub const ALL: [Domain; 5] = [
        Domain::Investments,
        Domain::Holdings,
        Domain::Users,
        Domain::Companies,
        Domain::ProfitLoss,
    ];

    /// Returns the string representation of this domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Investments => "investments",
            Domain::Holdings => "holdings",
            Domain::Users => "users",
            Domain::Companies => "companies",
            Domain::ProfitLoss => "profit_loss",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The cached state of one domain collection.
///
/// Loading, error, and timestamp are independent per collection; a fetch
/// failure records `error` without touching `items`, so the UI keeps showing
/// the last good data.
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_fetched_at: Option<DateTime<Utc>>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            last_fetched_at: None,
        }
    }
}

impl<T> CollectionState<T> {
    /// True when the collection was never fetched or its age at `now`
    /// exceeds `max_age_ms`.
    pub fn is_stale_at(&self, max_age_ms: i64, now: DateTime<Utc>) -> bool {
        match self.last_fetched_at {
            None => true,
            Some(fetched_at) => {
                now.signed_duration_since(fetched_at) > Duration::milliseconds(max_age_ms)
            }
        }
    }
}
