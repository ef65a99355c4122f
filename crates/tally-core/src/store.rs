//! Store abstraction consumed by the categorizer, insights engine and ledger
//!
//! The core never holds a global handle: callers pass a store value in, and
//! its lifecycle (open, pool, close) belongs to whoever created it.
//! `Database` is the production implementation.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Budget, CategoryRule, NewTransaction, Transaction};
use crate::month::Month;

pub trait SpendStore {
    /// All category rules in stored (insertion) order
    fn category_rules(&self) -> Result<Vec<CategoryRule>>;

    /// Budgets for a month, oldest first
    fn budgets_for_month(&self, month: &Month) -> Result<Vec<Budget>>;

    /// Transactions with `start <= date < end`, ordered by date then id
    fn transactions_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>>;

    /// Persist a transaction and return its generated id
    fn insert_transaction(&self, tx: &NewTransaction) -> Result<i64>;

    fn get_transaction(&self, id: i64) -> Result<Option<Transaction>>;

    /// Most recently created transaction with this merchant and amount
    fn find_latest_transaction(&self, merchant: &str, amount: f64) -> Result<Option<Transaction>>;
}
