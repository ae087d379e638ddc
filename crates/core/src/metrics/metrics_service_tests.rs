//! Unit tests for the metrics engine.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::holdings::Holding;
use crate::investments::{Investment, InvestmentStatus};
use crate::profit_loss::{Period, ProfitLossRecord};
use crate::store::Snapshot;
use crate::users::{User, UserRole};

// ============================================================================
// Fixtures
// ============================================================================

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn investment(id: &str, company: Option<&str>, current_value: Decimal) -> Investment {
    Investment {
        id: id.to_string(),
        name: format!("Investment {}", id),
        category: "Growth".to_string(),
        company_id: company.map(str::to_string),
        initial_amount: dec!(1000),
        current_value,
        created_at: at(2026, 1, 1),
        updated_at: at(2026, 1, 1),
        ..Default::default()
    }
}

fn holding(id: &str, investor: &str, investment: &str, amount: Decimal) -> Holding {
    Holding {
        id: id.to_string(),
        investor_id: investor.to_string(),
        investment_id: investment.to_string(),
        amount,
        current_value: amount,
        created_at: at(2026, 2, 10),
        updated_at: at(2026, 2, 10),
        ..Default::default()
    }
}

fn investor(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        role: UserRole::Investor,
        created_at: at(2026, 1, 1),
        ..Default::default()
    }
}

fn pl_record(id: &str, investment: &str, profit: Decimal, loss: Decimal) -> ProfitLossRecord {
    ProfitLossRecord {
        id: id.to_string(),
        investment_id: Some(investment.to_string()),
        period: Period::Monthly,
        profit,
        loss,
        net_amount: profit - loss,
        recorded_at: at(2026, 2, 20),
        ..Default::default()
    }
}

// ============================================================================
// calculate_metrics
// ============================================================================

#[test]
fn test_empty_snapshot_yields_zero_metrics() {
    let snapshot = Snapshot::default();
    let metrics = calculate_metrics(&snapshot, None);

    assert_eq!(metrics, PortfolioMetrics::zero(snapshot.taken_at));
}

#[test]
fn test_fresh_install_only_superadmin() {
    let snapshot = Snapshot {
        users: vec![User {
            id: "u-root".to_string(),
            email: "root@example.com".to_string(),
            role: UserRole::Superadmin,
            created_at: at(2026, 1, 1),
            ..Default::default()
        }],
        ..Default::default()
    };

    let metrics = calculate_metrics(&snapshot, None);
    assert_eq!(metrics.total_value, Decimal::ZERO);
    assert_eq!(metrics.total_invested, Decimal::ZERO);
    assert_eq!(metrics.roi, Decimal::ZERO);
    assert_eq!(metrics.investment_count, 0);
    assert_eq!(metrics.investor_count, 0);
}

#[test]
fn test_metrics_aggregate_values_and_investors() {
    let snapshot = Snapshot {
        investments: vec![
            investment("inv-1", None, dec!(1200)),
            investment("inv-2", None, dec!(800)),
        ],
        holdings: vec![
            holding("h-1", "u-1", "inv-1", dec!(500)),
            holding("h-2", "u-2", "inv-1", dec!(300)),
            holding("h-3", "u-1", "inv-2", dec!(200)),
        ],
        users: vec![investor("u-1"), investor("u-2")],
        profit_loss: vec![
            pl_record("pl-1", "inv-1", dec!(90), dec!(10)),
            pl_record("pl-2", "inv-2", dec!(30), dec!(10)),
        ],
        ..Default::default()
    };

    let metrics = calculate_metrics(&snapshot, None);
    assert_eq!(metrics.total_value, dec!(2000));
    assert_eq!(metrics.total_invested, dec!(1000));
    assert_eq!(metrics.total_profit, dec!(120));
    assert_eq!(metrics.total_loss, dec!(20));
    assert_eq!(metrics.net_profit, dec!(100));
    // 100 / 1000 * 100
    assert_eq!(metrics.roi, dec!(10));
    assert_eq!(metrics.investment_count, 2);
    // u-1 holds two investments but counts once
    assert_eq!(metrics.investor_count, 2);
}

#[test]
fn test_scoped_metrics_exclude_out_of_scope_holdings() {
    let snapshot = Snapshot {
        investments: vec![
            investment("inv-a", Some("co-1"), dec!(1000)),
            investment("inv-b", Some("co-2"), dec!(5000)),
        ],
        holdings: vec![
            holding("h-1", "u-1", "inv-a", dec!(400)),
            holding("h-2", "u-2", "inv-b", dec!(4000)),
        ],
        profit_loss: vec![
            pl_record("pl-1", "inv-a", dec!(50), Decimal::ZERO),
            pl_record("pl-2", "inv-b", dec!(500), Decimal::ZERO),
        ],
        ..Default::default()
    };

    let metrics = calculate_metrics(&snapshot, Some("co-1"));
    assert_eq!(metrics.total_value, dec!(1000));
    assert_eq!(metrics.total_invested, dec!(400));
    assert_eq!(metrics.total_profit, dec!(50));
    assert_eq!(metrics.investment_count, 1);
    assert_eq!(metrics.investor_count, 1);
}

#[test]
fn test_metrics_zero_invested_guards_roi() {
    let snapshot = Snapshot {
        investments: vec![investment("inv-1", None, dec!(1000))],
        profit_loss: vec![pl_record("pl-1", "inv-1", dec!(100), Decimal::ZERO)],
        ..Default::default()
    };

    let metrics = calculate_metrics(&snapshot, None);
    assert_eq!(metrics.net_profit, dec!(100));
    assert_eq!(metrics.roi, Decimal::ZERO);
}

// ============================================================================
// calculate_performance_trend
// ============================================================================

#[test]
fn test_trend_buckets_same_month_together() {
    let mut h1 = holding("h-1", "u-1", "inv-1", dec!(100));
    h1.created_at = at(2026, 2, 3);
    let mut h2 = holding("h-2", "u-2", "inv-1", dec!(200));
    h2.created_at = at(2026, 2, 25);

    let snapshot = Snapshot {
        investments: vec![investment("inv-1", None, dec!(1000))],
        holdings: vec![h1, h2],
        profit_loss: vec![
            pl_record("pl-1", "inv-1", dec!(40), dec!(10)),
            pl_record("pl-2", "inv-1", dec!(10), dec!(10)),
        ],
        ..Default::default()
    };

    let trend = calculate_performance_trend(&snapshot, None, Granularity::Month);
    assert_eq!(trend.len(), 1);
    let point = &trend[0];
    assert_eq!(point.period, "2026-02");
    assert_eq!(point.total_investment, dec!(300));
    assert_eq!(point.investment_count, 2);
    assert_eq!(point.total_return, dec!(30));
    // 30 / 300 * 100
    assert_eq!(point.roi, dec!(10));
}

#[test]
fn test_trend_sorted_ascending_across_months() {
    let mut h1 = holding("h-1", "u-1", "inv-1", dec!(100));
    h1.created_at = at(2025, 12, 1);
    let mut h2 = holding("h-2", "u-1", "inv-1", dec!(200));
    h2.created_at = at(2026, 1, 1);
    let mut h3 = holding("h-3", "u-1", "inv-1", dec!(300));
    h3.created_at = at(2026, 3, 1);

    let snapshot = Snapshot {
        investments: vec![investment("inv-1", None, dec!(1000))],
        holdings: vec![h3, h1, h2],
        ..Default::default()
    };

    let trend = calculate_performance_trend(&snapshot, None, Granularity::Month);
    let periods: Vec<&str> = trend.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(periods, ["2025-12", "2026-01", "2026-03"]);
}

#[test]
fn test_trend_period_with_only_returns_still_appears() {
    let mut record = pl_record("pl-1", "inv-1", dec!(25), Decimal::ZERO);
    record.recorded_at = at(2026, 5, 2);

    let snapshot = Snapshot {
        investments: vec![investment("inv-1", None, dec!(1000))],
        profit_loss: vec![record],
        ..Default::default()
    };

    let trend = calculate_performance_trend(&snapshot, None, Granularity::Month);
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].period, "2026-05");
    assert_eq!(trend[0].total_return, dec!(25));
    assert_eq!(trend[0].total_investment, Decimal::ZERO);
    assert_eq!(trend[0].roi, Decimal::ZERO);
}

#[test]
fn test_trend_quarter_and_year_granularities() {
    let mut h1 = holding("h-1", "u-1", "inv-1", dec!(100));
    h1.created_at = at(2026, 1, 15);
    let mut h2 = holding("h-2", "u-1", "inv-1", dec!(200));
    h2.created_at = at(2026, 6, 15);

    let snapshot = Snapshot {
        investments: vec![investment("inv-1", None, dec!(1000))],
        holdings: vec![h1, h2],
        ..Default::default()
    };

    let quarterly = calculate_performance_trend(&snapshot, None, Granularity::Quarter);
    let periods: Vec<&str> = quarterly.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(periods, ["2026-Q1", "2026-Q2"]);

    let yearly = calculate_performance_trend(&snapshot, None, Granularity::Year);
    assert_eq!(yearly.len(), 1);
    assert_eq!(yearly[0].total_investment, dec!(300));
}

// ============================================================================
// calculate_status_distribution
// ============================================================================

#[test]
fn test_status_distribution_percentages() {
    let mut active = investment("inv-1", None, dec!(750));
    active.status = InvestmentStatus::Active;
    let mut paused = investment("inv-2", None, dec!(250));
    paused.status = InvestmentStatus::Paused;

    let snapshot = Snapshot {
        investments: vec![active, paused],
        ..Default::default()
    };

    let slices = calculate_status_distribution(&snapshot, None);
    assert_eq!(slices.len(), 2);
    // Sorted by value descending
    assert_eq!(slices[0].status, InvestmentStatus::Active);
    assert_eq!(slices[0].percentage, dec!(75));
    assert_eq!(slices[1].status, InvestmentStatus::Paused);
    assert_eq!(slices[1].percentage, dec!(25));
}

#[test]
fn test_status_distribution_zero_value_guards_percentage() {
    let snapshot = Snapshot {
        investments: vec![investment("inv-1", None, Decimal::ZERO)],
        ..Default::default()
    };

    let slices = calculate_status_distribution(&snapshot, None);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].percentage, Decimal::ZERO);
}

// ============================================================================
// calculate_portfolio_distribution
// ============================================================================

#[test]
fn test_portfolio_distribution_groups_by_category() {
    let mut property = investment("inv-1", None, dec!(1000));
    property.category = "Real Estate".to_string();
    let mut tech = investment("inv-2", None, dec!(1000));
    tech.category = "Technology".to_string();

    let snapshot = Snapshot {
        investments: vec![property, tech],
        holdings: vec![
            holding("h-1", "u-1", "inv-1", dec!(600)),
            holding("h-2", "u-1", "inv-2", dec!(400)),
            holding("h-3", "u-2", "inv-2", dec!(999)),
        ],
        ..Default::default()
    };

    let slices = calculate_portfolio_distribution(&snapshot, Some("u-1"));
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].category, "Real Estate");
    assert_eq!(slices[0].value, dec!(600));
    assert_eq!(slices[0].percentage, dec!(60));
    assert_eq!(slices[1].category, "Technology");
    assert_eq!(slices[1].percentage, dec!(40));
}

#[test]
fn test_portfolio_distribution_unresolved_investment_goes_to_unknown() {
    let snapshot = Snapshot {
        holdings: vec![holding("h-1", "u-1", "inv-gone", dec!(500))],
        ..Default::default()
    };

    let slices = calculate_portfolio_distribution(&snapshot, Some("u-1"));
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].category, UNKNOWN_CATEGORY);
    assert_eq!(slices[0].value, dec!(500));
    assert_eq!(slices[0].percentage, dec!(100));
}

#[test]
fn test_portfolio_distribution_value_follows_appreciation() {
    let mut appreciated = investment("inv-1", None, dec!(2000));
    appreciated.initial_amount = dec!(1000);

    let snapshot = Snapshot {
        investments: vec![appreciated],
        holdings: vec![holding("h-1", "u-1", "inv-1", dec!(500))],
        ..Default::default()
    };

    let slices = calculate_portfolio_distribution(&snapshot, Some("u-1"));
    assert_eq!(slices[0].value, dec!(1000));
}

// ============================================================================
// calculate_roi / calculate_total_value
// ============================================================================

#[test]
fn test_roi_flat_investment_is_zero() {
    let mut flat = investment("inv-1", None, dec!(1000));
    flat.initial_amount = dec!(1000);

    let snapshot = Snapshot {
        investments: vec![flat],
        ..Default::default()
    };

    assert_eq!(calculate_roi(&snapshot, "inv-1"), Decimal::ZERO);
}

#[test]
fn test_roi_baseline_falls_back_to_min_investment() {
    let mut inv = investment("inv-1", None, dec!(150));
    inv.initial_amount = Decimal::ZERO;
    inv.min_investment = Some(dec!(100));

    let snapshot = Snapshot {
        investments: vec![inv],
        ..Default::default()
    };

    assert_eq!(calculate_roi(&snapshot, "inv-1"), dec!(50));
}

#[test]
fn test_roi_without_positive_baseline_is_zero() {
    let mut inv = investment("inv-1", None, dec!(150));
    inv.initial_amount = Decimal::ZERO;
    inv.min_investment = None;

    let snapshot = Snapshot {
        investments: vec![inv],
        ..Default::default()
    };

    assert_eq!(calculate_roi(&snapshot, "inv-1"), Decimal::ZERO);
    assert_eq!(calculate_roi(&snapshot, "inv-missing"), Decimal::ZERO);
}

#[test]
fn test_total_value_respects_scope() {
    let snapshot = Snapshot {
        investments: vec![
            investment("inv-a", Some("co-1"), dec!(100)),
            investment("inv-b", Some("co-2"), dec!(200)),
            investment("inv-c", None, dec!(400)),
        ],
        ..Default::default()
    };

    assert_eq!(calculate_total_value(&snapshot, None), dec!(700));
    assert_eq!(calculate_total_value(&snapshot, Some("co-2")), dec!(200));
}
