//! Monthly insights command

use anyhow::Result;
use tally_core::{
    db::Database,
    models::{MessageClass, MonthSummary},
    monthly_insights,
};

use super::truncate;

fn class_icon(class: MessageClass) -> &'static str {
    match class {
        MessageClass::Healthy => "✅",
        MessageClass::Warning => "⚠️ ",
        MessageClass::OverThreshold => "🔴",
        MessageClass::NoBudget => "➖",
    }
}

pub fn cmd_insights(db: &Database, month: Option<&str>, json: bool) -> Result<()> {
    let summary = monthly_insights(db, month)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &MonthSummary) {
    println!();
    println!("📊 Spending for {}", summary.month);
    println!("   ─────────────────────────────────────────────────────────");

    if summary.categories.is_empty() {
        println!("   No transactions this month.");
        return;
    }

    println!(
        "   {:20} │ {:>10} │ {:>10} │ {:>7}",
        "Category", "Spent", "Budget", "Used"
    );
    println!("   ─────────────────────┼────────────┼────────────┼────────");

    for cat in &summary.categories {
        let budget = cat
            .budget
            .map(|b| format!("{:.2}", b))
            .unwrap_or_else(|| "-".to_string());
        let used = cat
            .used_pct
            .map(|p| format!("{:.1}%", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "   {:20} │ {:>10.2} │ {:>10} │ {:>7}",
            truncate(&cat.category, 20),
            cat.spent,
            budget,
            used
        );
    }

    println!();
    println!("   Total: {:.2}", summary.total_spend);
    if let Some(top) = &summary.top_category {
        println!("   Top category: {}", top);
    }

    println!();
    for cat in &summary.categories {
        println!("   {} {}", class_icon(cat.message_class), cat.message);
    }
}
