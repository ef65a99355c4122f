//! Categorization rule commands

use anyhow::Result;
use tally_core::{categorize, db::Database, matching_rules, validate::validate_keyword};

use super::truncate;

pub fn cmd_rules_list(db: &Database) -> Result<()> {
    let rules = db.list_rules()?;

    if rules.is_empty() {
        println!("No rules defined. Add one with:");
        println!("  tally rules add <keyword> <category>");
        return Ok(());
    }

    println!();
    println!("📋 Category Rules (first match wins)");
    println!("   ─────────────────────────────────────────────────");
    println!("   {:>4} │ {:24} │ {}", "ID", "Keyword", "Category");
    println!("   ─────┼──────────────────────────┼────────────────");

    for rule in rules {
        println!(
            "   {:>4} │ {:24} │ {}",
            rule.id,
            truncate(&rule.keyword, 24),
            truncate(&rule.category, 30)
        );
    }

    Ok(())
}

pub fn cmd_rules_add(db: &Database, keyword: &str, category: &str) -> Result<()> {
    validate_keyword(keyword)?;

    let rule_id = db.create_rule(keyword, category)?;
    println!(
        "✅ Created rule #{}: '{}' -> {}",
        rule_id, keyword, category
    );

    Ok(())
}

pub fn cmd_rules_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_rule(id)?;
    println!("✅ Deleted rule #{}", id);

    Ok(())
}

pub fn cmd_rules_test(db: &Database, merchant: &str, description: Option<&str>) -> Result<()> {
    let rules = db.list_rules()?;
    let matches = matching_rules(merchant, description, &rules);

    if matches.is_empty() {
        println!("No rules match \"{}\"", merchant);
        return Ok(());
    }

    println!();
    println!("🔍 Rules matching \"{}\":", merchant);
    println!("   ─────────────────────────────────────────────────");

    for rule in &matches {
        println!(
            "   Rule #{} ('{}') -> {}",
            rule.id, rule.keyword, rule.category
        );
    }

    if let Some(category) = categorize(merchant, description, &rules) {
        println!();
        println!("   Would categorize as: {}", category);
    }

    Ok(())
}
