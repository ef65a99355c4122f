//! Tally Core Library
//!
//! Shared functionality for the Tally spend tracker:
//! - Database access and migrations
//! - Keyword rules for automatic transaction categorization
//! - Monthly insights with budget utilization messages
//! - Input validation for transactions, rules and budgets

pub mod categorize;
pub mod db;
pub mod error;
pub mod insights;
pub mod ledger;
pub mod models;
pub mod month;
pub mod store;
pub mod validate;

pub use categorize::{auto_categorize, categorize, matching_rules};
pub use db::{AuditEntry, Database};
pub use error::{Error, Result};
pub use insights::{compute_insights, monthly_insights, UNCATEGORIZED};
pub use ledger::record_transaction;
pub use month::Month;
pub use store::SpendStore;
