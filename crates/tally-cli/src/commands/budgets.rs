//! Budget commands and category suggestions

use anyhow::Result;
use tally_core::{db::Database, models::default_categories, Month};

pub fn cmd_budgets_list(db: &Database, month: Option<&str>) -> Result<()> {
    let month = month.map(str::parse::<Month>).transpose()?;
    let budgets = db.list_budgets(month.as_ref())?;

    if budgets.is_empty() {
        println!("No budgets set. Add one with:");
        println!("  tally budgets set <category> <limit> [--month YYYY-MM]");
        return Ok(());
    }

    println!();
    println!("💰 Budgets");
    println!("   ─────────────────────────────────────────────────");
    println!("   {:>4} │ {:7} │ {:20} │ {:>10}", "ID", "Month", "Category", "Limit");
    println!("   ─────┼─────────┼──────────────────────┼───────────");

    for budget in budgets {
        println!(
            "   {:>4} │ {:7} │ {:20} │ {:>10.2}",
            budget.id, budget.month, budget.category, budget.limit
        );
    }

    Ok(())
}

/// Set a budget; without --month the current month is used
pub fn cmd_budgets_set(
    db: &Database,
    category: &str,
    limit: f64,
    month: Option<&str>,
) -> Result<()> {
    let month = Month::resolve(month)?;

    let id = db.set_budget(category, &month.to_string(), limit)?;
    println!(
        "✅ Budget #{}: {} limited to {:.2} for {}",
        id, category, limit, month
    );

    Ok(())
}

pub fn cmd_categories() -> Result<()> {
    println!();
    println!("🏷️  Suggested Categories");
    println!("   ─────────────────────────────");

    for suggestion in default_categories() {
        println!(
            "   {:16} {}",
            suggestion.name,
            suggestion.icon.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
