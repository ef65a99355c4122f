//! Input validation run before any core logic
//!
//! Each check returns `Error::Validation` describing the first problem found.

use crate::error::{Error, Result};
use crate::models::NewTransaction;
use crate::month::Month;

/// Default number of transactions returned by a listing
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Largest listing limit accepted
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Largest amount accepted for a transaction or budget limit
///
/// Keeps monthly sums finite so totals always serialize as numbers.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

fn invalid(msg: impl Into<String>) -> Error {
    Error::Validation(msg.into())
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(invalid(format!("{} must be a positive number", field)));
    }
    if value > MAX_AMOUNT {
        return Err(invalid(format!("{} must not exceed {}", field, MAX_AMOUNT)));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(invalid(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

pub fn validate_transaction(tx: &NewTransaction) -> Result<()> {
    require_positive("amount", tx.amount)?;
    require_text("merchant", &tx.merchant)?;
    require_text("currency", &tx.currency)?;
    Ok(())
}

/// Rules need a category; the keyword may be anything, including empty
/// (an empty keyword matches every transaction).
pub fn validate_rule(_keyword: &str, category: &str) -> Result<()> {
    require_text("category", category)
}

/// Stricter keyword check used by the API and CLI, which refuse blank keywords
pub fn validate_keyword(keyword: &str) -> Result<()> {
    require_text("keyword", keyword)
}

pub fn validate_budget(category: &str, month: &str, limit: f64) -> Result<Month> {
    require_text("category", category)?;
    let month = month.parse::<Month>()?;
    require_positive("limit", limit)?;
    Ok(month)
}

/// Resolve an optional listing limit, rejecting values outside 1..=MAX_LIST_LIMIT
pub fn validate_limit(limit: Option<i64>) -> Result<i64> {
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
    if (1..=MAX_LIST_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(invalid(format!(
            "limit must be between 1 and {}",
            MAX_LIST_LIMIT
        )))
    }
}
