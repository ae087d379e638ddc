//! Pure metric derivations over the current snapshot.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::metrics_model::{
    AllocationSlice, Granularity, PortfolioMetrics, StatusSlice, TrendPoint, UNKNOWN_CATEGORY,
};
use crate::investments::{Investment, InvestmentStatus};
use crate::store::Snapshot;

/// Percentage of `part` in `whole`, zero-guarded and rounded to 2 places.
fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        (part / whole * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    }
}

/// Investments visible in the given scope (a sub-company id).
fn scoped_investments<'a>(snapshot: &'a Snapshot, scope: Option<&str>) -> Vec<&'a Investment> {
    snapshot
        .investments
        .iter()
        .filter(|investment| match scope {
            Some(company_id) => investment.company_id.as_deref() == Some(company_id),
            None => true,
        })
        .collect()
}

/// Headline aggregates for the scope.
///
/// Sums investment values, holding amounts, and profit/loss records that
/// reference the scoped investments; amounts of holdings referencing
/// investments outside the scope are never included.
pub fn calculate_metrics(snapshot: &Snapshot, scope: Option<&str>) -> PortfolioMetrics {
    let investments = scoped_investments(snapshot, scope);
    let investment_ids: HashSet<&str> = investments.iter().map(|i| i.id.as_str()).collect();

    let total_value: Decimal = investments.iter().map(|i| i.current_value).sum();

    let mut total_invested = Decimal::ZERO;
    let mut investors: HashSet<&str> = HashSet::new();
    let mut holding_ids: HashSet<&str> = HashSet::new();
    for holding in &snapshot.holdings {
        if investment_ids.contains(holding.investment_id.as_str()) {
            total_invested += holding.amount;
            investors.insert(holding.investor_id.as_str());
            holding_ids.insert(holding.id.as_str());
        }
    }

    let mut total_profit = Decimal::ZERO;
    let mut total_loss = Decimal::ZERO;
    for record in &snapshot.profit_loss {
        let matches_investment = record
            .investment_id
            .as_deref()
            .is_some_and(|id| investment_ids.contains(id));
        let matches_holding = record
            .holding_id
            .as_deref()
            .is_some_and(|id| holding_ids.contains(id));
        if matches_investment || matches_holding {
            total_profit += record.profit;
            total_loss += record.loss;
        }
    }

    let net_profit = total_profit - total_loss;

    PortfolioMetrics {
        total_value,
        total_invested,
        total_profit,
        total_loss,
        net_profit,
        roi: percentage(net_profit, total_invested),
        investment_count: investments.len(),
        investor_count: investors.len(),
        as_of: snapshot.taken_at,
    }
}

/// Period-bucketed investment inflow and returns for the scope.
///
/// Holdings bucket by creation date, profit/loss records by their recorded
/// date, both under the same key scheme; the buckets are joined by key
/// (union - a period with only returns still appears) and come back sorted
/// ascending, which for zero-padded keys is chronological.
pub fn calculate_performance_trend(
    snapshot: &Snapshot,
    scope: Option<&str>,
    granularity: Granularity,
) -> Vec<TrendPoint> {
    let investments = scoped_investments(snapshot, scope);
    let investment_ids: HashSet<&str> = investments.iter().map(|i| i.id.as_str()).collect();

    let empty_point = |period: &String| TrendPoint {
        period: period.clone(),
        total_investment: Decimal::ZERO,
        investment_count: 0,
        total_return: Decimal::ZERO,
        roi: Decimal::ZERO,
    };

    let mut buckets: BTreeMap<String, TrendPoint> = BTreeMap::new();
    let mut holding_ids: HashSet<&str> = HashSet::new();
    for holding in &snapshot.holdings {
        if !investment_ids.contains(holding.investment_id.as_str()) {
            continue;
        }
        holding_ids.insert(holding.id.as_str());
        let key = granularity.period_key(holding.created_at);
        let point = buckets.entry(key).or_insert_with_key(empty_point);
        point.total_investment += holding.amount;
        point.investment_count += 1;
    }

    for record in &snapshot.profit_loss {
        let matches_investment = record
            .investment_id
            .as_deref()
            .is_some_and(|id| investment_ids.contains(id));
        let matches_holding = record
            .holding_id
            .as_deref()
            .is_some_and(|id| holding_ids.contains(id));
        if !matches_investment && !matches_holding {
            continue;
        }
        let key = granularity.period_key(record.recorded_at);
        let point = buckets.entry(key).or_insert_with_key(empty_point);
        point.total_return += record.profit - record.loss;
    }

    buckets
        .into_values()
        .map(|mut point| {
            point.roi = percentage(point.total_return, point.total_investment);
            point
        })
        .collect()
}

/// Scoped investments grouped by lifecycle status.
pub fn calculate_status_distribution(snapshot: &Snapshot, scope: Option<&str>) -> Vec<StatusSlice> {
    let investments = scoped_investments(snapshot, scope);

    let mut groups: HashMap<InvestmentStatus, (usize, Decimal)> = HashMap::new();
    for investment in &investments {
        let entry = groups
            .entry(investment.status)
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += investment.current_value;
    }

    let grand_total: Decimal = groups.values().map(|(_, value)| *value).sum();

    let mut slices: Vec<StatusSlice> = groups
        .into_iter()
        .map(|(status, (count, total_value))| StatusSlice {
            status,
            count,
            total_value,
            percentage: percentage(total_value, grand_total),
        })
        .collect();

    // Sort by value descending
    slices.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    slices
}

/// An investor's holdings grouped by the investment's category.
///
/// Values derive from the investment's appreciation; a holding whose
/// investment cannot be resolved lands in the explicit "Unknown" bucket at
/// its mirrored value instead of being dropped silently.
pub fn calculate_portfolio_distribution(
    snapshot: &Snapshot,
    investor: Option<&str>,
) -> Vec<AllocationSlice> {
    let investments_by_id: HashMap<&str, &Investment> = snapshot
        .investments
        .iter()
        .map(|i| (i.id.as_str(), i))
        .collect();

    let mut groups: HashMap<String, Decimal> = HashMap::new();
    for holding in &snapshot.holdings {
        if let Some(investor_id) = investor {
            if holding.investor_id != investor_id {
                continue;
            }
        }
        match investments_by_id.get(holding.investment_id.as_str()) {
            Some(investment) => {
                *groups
                    .entry(investment.category.clone())
                    .or_insert(Decimal::ZERO) += holding.value_at(investment);
            }
            None => {
                *groups
                    .entry(UNKNOWN_CATEGORY.to_string())
                    .or_insert(Decimal::ZERO) += holding.current_value;
            }
        }
    }

    let grand_total: Decimal = groups.values().copied().sum();

    let mut slices: Vec<AllocationSlice> = groups
        .into_iter()
        .map(|(category, value)| AllocationSlice {
            category,
            value,
            percentage: percentage(value, grand_total),
        })
        .collect();

    // Sort by value descending
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

/// Return since inception for one investment, in percent.
///
/// The baseline prefers the initial amount, falls back to the minimum
/// investment, and yields zero when no positive baseline exists (or the
/// investment is not in the snapshot).
pub fn calculate_roi(snapshot: &Snapshot, investment_id: &str) -> Decimal {
    let Some(investment) = snapshot.investment(investment_id) else {
        return Decimal::ZERO;
    };

    let baseline = if investment.initial_amount > Decimal::ZERO {
        investment.initial_amount
    } else {
        match investment.min_investment {
            Some(min) if min > Decimal::ZERO => min,
            _ => return Decimal::ZERO,
        }
    };

    ((investment.current_value - baseline) / baseline * dec!(100)).round_dp(2)
}

/// Sum of current values over the scoped investments.
pub fn calculate_total_value(snapshot: &Snapshot, scope: Option<&str>) -> Decimal {
    scoped_investments(snapshot, scope)
        .iter()
        .map(|investment| investment.current_value)
        .sum()
}
