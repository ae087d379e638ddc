//! Shared recomputation of derived investment aggregates.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::holdings::Holding;

/// Recomputed aggregates for one investment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct HoldingRollup {
    pub total_invested: Decimal,
    pub total_investors: u32,
}

/// Recomputes, per investment id, the invested total and the distinct
/// investor count from the raw holdings.
///
/// This is the single formula behind both the validator's aggregate checks
/// and the reconciler's rewrite.
pub(crate) fn rollup_by_investment(holdings: &[Holding]) -> HashMap<String, HoldingRollup> {
    let mut sums: HashMap<&str, (Decimal, HashSet<&str>)> = HashMap::new();
    for holding in holdings {
        let entry = sums
            .entry(holding.investment_id.as_str())
            .or_insert_with(|| (Decimal::ZERO, HashSet::new()));
        entry.0 += holding.amount;
        entry.1.insert(holding.investor_id.as_str());
    }

    sums.into_iter()
        .map(|(investment_id, (total_invested, investors))| {
            (
                investment_id.to_string(),
                HoldingRollup {
                    total_invested,
                    total_investors: investors.len() as u32,
                },
            )
        })
        .collect()
}
