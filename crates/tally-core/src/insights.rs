//! Monthly spend insights
//!
//! Aggregates one month of transactions by category, joins the totals with
//! that month's budgets and derives a utilization message per category.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::models::{Budget, CategorySummary, MessageClass, MonthSummary, Transaction};
use crate::month::Month;
use crate::store::SpendStore;

/// Label for transactions without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Spend at or above this share of budget is over threshold
const OVER_THRESHOLD_PCT: f64 = 90.0;

/// Spend at or above this share of budget is trending high
const WARNING_PCT: f64 = 70.0;

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn category_label(category: Option<&str>) -> &str {
    match category {
        Some(c) if !c.is_empty() => c,
        _ => UNCATEGORIZED,
    }
}

/// Running total for one raw category value
///
/// None and `Some("")` are separate groups even though both are labelled
/// Uncategorized.
struct CategoryTotal<'a> {
    category: Option<&'a str>,
    total: f64,
    count: i64,
}

/// Group the month's transactions by category, highest spend first
///
/// Groups start in first-seen order and the sort is stable, so equal totals
/// keep the order the transactions arrived in.
fn group_by_category<'a>(month: &Month, transactions: &'a [Transaction]) -> Vec<CategoryTotal<'a>> {
    let mut groups: Vec<CategoryTotal<'a>> = Vec::new();
    let mut index: HashMap<Option<&'a str>, usize> = HashMap::new();

    for tx in transactions.iter().filter(|tx| month.contains(&tx.date)) {
        let key = tx.category.as_deref();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(CategoryTotal {
                category: key,
                total: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[slot].total += tx.amount;
        groups[slot].count += 1;
    }

    groups.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    groups
}

/// Index budget limits by category for one month
///
/// When a category has several budgets for the month, the most recently
/// created one (highest id) is used.
fn budget_limits<'a>(month: &Month, budgets: &'a [Budget]) -> HashMap<&'a str, &'a Budget> {
    let month_str = month.to_string();
    let mut limits: HashMap<&'a str, &'a Budget> = HashMap::new();

    for budget in budgets.iter().filter(|b| b.month == month_str) {
        limits
            .entry(budget.category.as_str())
            .and_modify(|existing| {
                if budget.id > existing.id {
                    *existing = budget;
                }
            })
            .or_insert(budget);
    }

    limits
}

/// Classify spend against a budget limit and build the user-facing message
fn utilization_message(category: &str, total: f64, limit: Option<f64>) -> (MessageClass, String, Option<f64>) {
    let Some(limit) = limit.filter(|l| *l > 0.0) else {
        return (
            MessageClass::NoBudget,
            format!(
                "No budget set for {}. Consider adding one to track spending.",
                category
            ),
            None,
        );
    };

    let used_pct = round_to(total / limit * 100.0, 1);
    let (class, message) = if used_pct >= OVER_THRESHOLD_PCT {
        (
            MessageClass::OverThreshold,
            format!(
                "You're at {:.1}% of your {} budget. Consider reducing spend or raising your limit.",
                used_pct, category
            ),
        )
    } else if used_pct >= WARNING_PCT {
        (
            MessageClass::Warning,
            format!(
                "{} spending is trending high at {:.1}%. Keep an eye on it.",
                category, used_pct
            ),
        )
    } else {
        (
            MessageClass::Healthy,
            format!("{} spending is healthy at {:.1}%.", category, used_pct),
        )
    };

    (class, message, Some(used_pct))
}

/// Summarize one month of spending against that month's budgets
///
/// Transactions outside the month and budgets for other months are ignored,
/// so callers may pass supersets.
pub fn compute_insights(
    month: &Month,
    transactions: &[Transaction],
    budgets: &[Budget],
) -> MonthSummary {
    let groups = group_by_category(month, transactions);
    let limits = budget_limits(month, budgets);

    let categories: Vec<CategorySummary> = groups
        .iter()
        .map(|group| {
            let label = category_label(group.category);
            let limit = limits.get(label).map(|b| b.limit).filter(|l| *l > 0.0);
            let (message_class, message, used_pct) = utilization_message(label, group.total, limit);

            CategorySummary {
                category: label.to_string(),
                spent: round_to(group.total, 2),
                budget: limit,
                message,
                message_class,
                transaction_count: group.count,
                used_pct,
            }
        })
        .collect();

    let total_spend = round_to(categories.iter().map(|c| c.spent).sum(), 2);

    MonthSummary {
        month: month.to_string(),
        top_category: categories.first().map(|c| c.category.clone()),
        categories,
        total_spend,
    }
}

/// Compute insights for a month (default: current UTC month) from the store
///
/// A malformed month is rejected before the store is touched.
pub fn monthly_insights(store: &impl SpendStore, month: Option<&str>) -> Result<MonthSummary> {
    let month = Month::resolve(month)?;
    let (start, end) = month.bounds();

    let transactions = store.transactions_between(start, end)?;
    let budgets = store.budgets_for_month(&month)?;

    debug!(
        month = %month,
        transactions = transactions.len(),
        budgets = budgets.len(),
        "Computing monthly insights"
    );

    Ok(compute_insights(&month, &transactions, &budgets))
}
