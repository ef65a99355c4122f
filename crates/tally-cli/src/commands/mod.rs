//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init) and shared utilities (open_db)
//! - `serve` - Web server command
//! - `transactions` - Record and list transactions
//! - `rules` - Categorization rule commands (list, add, delete, test)
//! - `budgets` - Budget commands and category suggestions
//! - `insights` - Monthly spend summary

pub mod budgets;
pub mod core;
pub mod insights;
pub mod rules;
pub mod serve;
pub mod transactions;

// Re-export command functions for main.rs
pub use budgets::*;
pub use core::*;
pub use insights::*;
pub use rules::*;
pub use serve::*;
pub use transactions::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
