//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track spending against monthly budgets
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Self-hosted personal spend tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set TALLY_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory of static UI files to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Record a transaction (categorized by rules when --category is omitted)
    Add {
        /// Amount spent (positive)
        #[arg(short, long)]
        amount: f64,

        /// Merchant or payee name
        #[arg(short, long)]
        merchant: String,

        /// Optional description or memo
        #[arg(short, long)]
        description: Option<String>,

        /// Category (overrides rules)
        #[arg(short, long)]
        category: Option<String>,

        /// Date (YYYY-MM-DD or RFC 3339, default: now)
        #[arg(long)]
        date: Option<String>,

        /// Account name or type (e.g., Checking)
        #[arg(long)]
        account: Option<String>,

        /// Currency code
        #[arg(long, default_value = "USD")]
        currency: String,
    },

    /// List recent transactions
    Transactions {
        /// Number of transactions to show (1-1000)
        #[arg(short, long, default_value = "20")]
        limit: i64,

        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Manage categorization rules
    Rules {
        #[command(subcommand)]
        action: Option<RulesAction>,
    },

    /// Manage monthly budgets
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },

    /// Show spending by category against budgets
    Insights {
        /// Month (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List suggested categories
    Categories,
}

#[derive(Subcommand)]
pub enum RulesAction {
    /// List rules in match order
    List,

    /// Add a new rule (matched after all existing rules)
    Add {
        /// Keyword to look for in merchant/description (case-insensitive)
        keyword: String,
        /// Category to assign when the keyword matches
        category: String,
    },

    /// Delete a rule
    Delete {
        /// Rule ID to delete
        id: i64,
    },

    /// Test which rules match a merchant
    Test {
        /// Merchant to test
        merchant: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// List budgets
    List {
        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set a budget for a category
    Set {
        /// Category name
        category: String,
        /// Spending limit
        limit: f64,
        /// Month (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}
