//! Local reconciliation of derived investment aggregates.

use rust_decimal::Decimal;

use super::rollup::rollup_by_investment;
use crate::store::Snapshot;

/// Returns a snapshot whose investment aggregates are recomputed from its
/// holdings.
///
/// Used right after a local optimistic mutation so the aggregate numbers
/// shown in the UI match the just-changed holdings before the next server
/// re-fetch confirms them. The rewrite is never persisted - the next fetch
/// is authoritative. The input is not mutated.
///
/// Only investment-level aggregates are reconciled; company-level mirrors
/// stay as the server sent them (fresh company numbers come from the
/// metrics engine, scoped to the company). Referential errors and bounds
/// violations are not repaired here - the validator keeps reporting them.
pub fn reconcile(snapshot: &Snapshot) -> Snapshot {
    let rollups = rollup_by_investment(&snapshot.holdings);

    let mut reconciled = snapshot.clone();
    for investment in &mut reconciled.investments {
        match rollups.get(&investment.id) {
            Some(rollup) => {
                investment.total_invested = rollup.total_invested;
                investment.total_investors = rollup.total_investors;
            }
            None => {
                investment.total_invested = Decimal::ZERO;
                investment.total_investors = 0;
            }
        }
    }
    reconciled
}
