//! Cross-entity consistency validation.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::consistency_model::ConsistencyReport;
use super::rollup::{rollup_by_investment, HoldingRollup};
use crate::constants::{AGGREGATE_TOLERANCE, HOLDING_LOSS_RATIO, VALUE_FLOOR_RATIO};
use crate::store::Snapshot;
use crate::users::UserRole;

/// Validates the snapshot's invariants and returns a structured report.
///
/// Detection only - nothing is repaired here; the reconciler handles the
/// aggregate rewrites, and referential or bounds errors stand until the
/// server state changes. Total: any missing optional field reads as "not
/// applicable", and an internally contradictory snapshot is data to report,
/// not a fault to crash on.
pub fn validate(snapshot: &Snapshot) -> ConsistencyReport {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let rollups = rollup_by_investment(&snapshot.holdings);
    let empty_rollup = HoldingRollup::default();

    // 1-2. Derived aggregates on investments, plus the soft value floor.
    for investment in &snapshot.investments {
        let computed = rollups.get(&investment.id).unwrap_or(&empty_rollup);

        if (investment.total_invested - computed.total_invested).abs() > AGGREGATE_TOLERANCE {
            errors.push(format!(
                "Investment {}: stored total invested {} does not match computed {}",
                investment.id, investment.total_invested, computed.total_invested
            ));
        }
        if investment.total_investors != computed.total_investors {
            errors.push(format!(
                "Investment {}: stored investor count {} does not match computed {}",
                investment.id, investment.total_investors, computed.total_investors
            ));
        }

        if computed.total_invested > Decimal::ZERO
            && investment.current_value < computed.total_invested * VALUE_FLOOR_RATIO
        {
            warnings.push(format!(
                "Investment {}: current value {} is below half of the invested total {}",
                investment.id, investment.current_value, computed.total_invested
            ));
        }
    }

    // 3. Role and scope rules on users.
    let investors_with_holdings: HashSet<&str> = snapshot
        .holdings
        .iter()
        .map(|h| h.investor_id.as_str())
        .collect();

    for user in &snapshot.users {
        match user.role {
            UserRole::Unknown => {
                errors.push(format!("User {}: unrecognized role", user.id));
            }
            UserRole::Admin => {
                if user.company_id.is_none() {
                    errors.push(format!(
                        "Admin user {} has no sub-company assigned",
                        user.id
                    ));
                }
            }
            UserRole::Investor => {
                if !investors_with_holdings.contains(user.id.as_str()) {
                    warnings.push(format!("Investor {} has no holdings yet", user.id));
                }
            }
            UserRole::Superadmin => {
                if user.company_id.is_some() {
                    warnings.push(format!(
                        "Superadmin {} carries a sub-company scope",
                        user.id
                    ));
                }
            }
        }
    }

    // 4. Referential and bounds rules on holdings.
    for holding in &snapshot.holdings {
        match snapshot.investment(&holding.investment_id) {
            None => {
                errors.push(format!(
                    "Holding {} references missing investment {}",
                    holding.id, holding.investment_id
                ));
            }
            Some(investment) => {
                if let Some(min) = investment.min_investment {
                    if holding.amount < min {
                        errors.push(format!(
                            "Holding {}: amount {} is below the minimum investment {} of {}",
                            holding.id, holding.amount, min, investment.id
                        ));
                    }
                }
                if let Some(max) = investment.max_investment {
                    if holding.amount > max {
                        errors.push(format!(
                            "Holding {}: amount {} exceeds the maximum investment {} of {}",
                            holding.id, holding.amount, max, investment.id
                        ));
                    }
                }
            }
        }

        match snapshot.user(&holding.investor_id) {
            None => {
                errors.push(format!(
                    "Holding {} references missing investor {}",
                    holding.id, holding.investor_id
                ));
            }
            Some(user) => {
                if user.role != UserRole::Investor {
                    errors.push(format!(
                        "Holding {}: user {} has role {}, not investor",
                        holding.id, user.id, user.role
                    ));
                }
            }
        }

        if holding.current_value < holding.amount * HOLDING_LOSS_RATIO {
            warnings.push(format!(
                "Holding {}: current value {} fell below 30% of the invested amount {}",
                holding.id, holding.current_value, holding.amount
            ));
        }
    }

    ConsistencyReport::from_findings(errors, warnings, snapshot.taken_at)
}
