//! Transaction commands (add, list)

use anyhow::{Context, Result};
use chrono::Utc;
use tally_core::{
    db::Database,
    models::{parse_flexible_datetime, NewTransaction},
    record_transaction,
    validate::validate_limit,
};

use super::truncate;

/// Fields for `tally add`
pub struct AddArgs {
    pub amount: f64,
    pub merchant: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub account: Option<String>,
    pub currency: String,
}

pub fn cmd_add(db: &Database, args: AddArgs) -> Result<()> {
    let date = match args.date.as_deref() {
        Some(raw) => parse_flexible_datetime(raw)
            .with_context(|| format!("Invalid date '{}' (use YYYY-MM-DD or RFC 3339)", raw))?,
        None => Utc::now(),
    };

    let tx = NewTransaction {
        amount: args.amount,
        merchant: args.merchant,
        description: args.description,
        category: args.category,
        date,
        account: args.account,
        currency: args.currency,
    };

    let stored = record_transaction(db, tx).context("Failed to record transaction")?;

    println!(
        "✅ Recorded transaction #{}: {:.2} {} at {}",
        stored.id, stored.amount, stored.currency, stored.merchant
    );
    match stored.category.as_deref() {
        Some(category) => println!("   Category: {}", category),
        None => println!("   Category: (none - no rule matched)"),
    }

    Ok(())
}

pub fn cmd_transactions_list(db: &Database, limit: i64, category: Option<&str>) -> Result<()> {
    let limit = validate_limit(Some(limit))?;
    let transactions = db.list_transactions(limit, category)?;

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!();
    println!("💳 Recent Transactions");
    println!("   ───────────────────────────────────────────────────────────────────");
    println!(
        "   {:>5} │ {:10} │ {:24} │ {:16} │ {:>10}",
        "ID", "Date", "Merchant", "Category", "Amount"
    );
    println!("   ──────┼────────────┼──────────────────────────┼──────────────────┼───────────");

    for tx in &transactions {
        println!(
            "   {:>5} │ {:10} │ {:24} │ {:16} │ {:>10.2}",
            tx.id,
            tx.date.format("%Y-%m-%d"),
            truncate(&tx.merchant, 24),
            truncate(tx.category.as_deref().unwrap_or("-"), 16),
            tx.amount
        );
    }

    println!();
    println!("   Showing {} transaction(s)", transactions.len());

    Ok(())
}
