//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use clap::Parser;
use tally_core::db::Database;
use tally_core::Month;

use crate::cli::{BudgetsAction, Cli, Commands, RulesAction};
use crate::commands::{self, truncate, AddArgs};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn add_args(amount: f64, merchant: &str, date: Option<&str>) -> AddArgs {
    AddArgs {
        amount,
        merchant: merchant.to_string(),
        description: None,
        category: None,
        date: date.map(String::from),
        account: None,
        currency: "USD".to_string(),
    }
}

// ========== Init Command Tests ==========

#[test]
fn test_cmd_init_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.db");

    commands::cmd_init(&path, true).unwrap();
    assert!(path.exists());

    let db = commands::open_db(&path, true).unwrap();
    assert!(db.list_tables().unwrap().contains(&"budgets".to_string()));
}

// ========== Transaction Command Tests ==========

#[test]
fn test_cmd_add_applies_rules() {
    let db = setup_test_db();
    db.create_rule("starbucks", "Dining").unwrap();

    commands::cmd_add(&db, add_args(5.75, "Starbucks #123", Some("2024-03-05"))).unwrap();

    let txs = db.list_transactions(10, None).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].category.as_deref(), Some("Dining"));
    assert_eq!(txs[0].date.format("%Y-%m-%d").to_string(), "2024-03-05");
}

#[test]
fn test_cmd_add_explicit_category_wins() {
    let db = setup_test_db();
    db.create_rule("starbucks", "Dining").unwrap();

    let mut args = add_args(5.75, "Starbucks", None);
    args.category = Some("Office".to_string());
    commands::cmd_add(&db, args).unwrap();

    let txs = db.list_transactions(10, None).unwrap();
    assert_eq!(txs[0].category.as_deref(), Some("Office"));
}

#[test]
fn test_cmd_add_rejects_bad_input() {
    let db = setup_test_db();

    assert!(commands::cmd_add(&db, add_args(-1.0, "Shop", None)).is_err());
    assert!(commands::cmd_add(&db, add_args(1.0, "Shop", Some("yesterday"))).is_err());
    assert_eq!(db.count_transactions().unwrap(), 0);
}

#[test]
fn test_cmd_transactions_list() {
    let db = setup_test_db();
    commands::cmd_add(&db, add_args(12.0, "Deli", Some("2024-03-01"))).unwrap();

    assert!(commands::cmd_transactions_list(&db, 20, None).is_ok());
    assert!(commands::cmd_transactions_list(&db, 20, Some("Nothing")).is_ok());
    assert!(commands::cmd_transactions_list(&db, 0, None).is_err());
    assert!(commands::cmd_transactions_list(&db, 5000, None).is_err());
}

// ========== Rules Command Tests ==========

#[test]
fn test_cmd_rules_add_and_delete() {
    let db = setup_test_db();

    commands::cmd_rules_add(&db, "uber", "Transport").unwrap();
    let rules = db.list_rules().unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].keyword, "uber");

    assert!(commands::cmd_rules_list(&db).is_ok());
    assert!(commands::cmd_rules_test(&db, "UBER TRIP", None).is_ok());

    commands::cmd_rules_delete(&db, rules[0].id).unwrap();
    assert!(db.list_rules().unwrap().is_empty());
    assert!(commands::cmd_rules_delete(&db, rules[0].id).is_err());
}

#[test]
fn test_cmd_rules_add_rejects_blank_keyword() {
    let db = setup_test_db();
    assert!(commands::cmd_rules_add(&db, "  ", "Transport").is_err());
    assert!(commands::cmd_rules_add(&db, "uber", "").is_err());
    assert!(db.list_rules().unwrap().is_empty());
}

#[test]
fn test_cmd_rules_list_empty() {
    let db = setup_test_db();
    assert!(commands::cmd_rules_list(&db).is_ok());
    assert!(commands::cmd_rules_test(&db, "anything", Some("at all")).is_ok());
}

// ========== Budget Command Tests ==========

#[test]
fn test_cmd_budgets_set_explicit_month() {
    let db = setup_test_db();

    commands::cmd_budgets_set(&db, "Dining", 200.0, Some("2024-03")).unwrap();

    let budgets = db.list_budgets(None).unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].month, "2024-03");
    assert_eq!(budgets[0].limit, 200.0);
    assert!(commands::cmd_budgets_list(&db, Some("2024-03")).is_ok());
}

#[test]
fn test_cmd_budgets_set_defaults_to_current_month() {
    let db = setup_test_db();

    commands::cmd_budgets_set(&db, "Dining", 50.0, None).unwrap();

    let budgets = db.list_budgets(None).unwrap();
    assert_eq!(budgets[0].month, Month::current().to_string());
}

#[test]
fn test_cmd_budgets_rejects_bad_input() {
    let db = setup_test_db();
    assert!(commands::cmd_budgets_set(&db, "Dining", 0.0, Some("2024-03")).is_err());
    assert!(commands::cmd_budgets_set(&db, "Dining", 10.0, Some("03-2024")).is_err());
    assert!(commands::cmd_budgets_list(&db, Some("2024-3")).is_err());
}

// ========== Insights Command Tests ==========

#[test]
fn test_cmd_insights() {
    let db = setup_test_db();
    db.create_rule("market", "Groceries").unwrap();
    db.set_budget("Groceries", "2024-03", 100.0).unwrap();
    commands::cmd_add(&db, add_args(50.0, "Market", Some("2024-03-02"))).unwrap();
    commands::cmd_add(&db, add_args(30.0, "Market", Some("2024-03-20"))).unwrap();

    assert!(commands::cmd_insights(&db, Some("2024-03"), false).is_ok());
    assert!(commands::cmd_insights(&db, Some("2024-03"), true).is_ok());
    assert!(commands::cmd_insights(&db, Some("2031-01"), false).is_ok());
    assert!(commands::cmd_insights(&db, Some("2024-13"), false).is_err());
}

#[test]
fn test_cmd_categories() {
    assert!(commands::cmd_categories().is_ok());
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_rules_add() {
    let cli = Cli::try_parse_from(["tally", "rules", "add", "starbucks", "Dining"]).unwrap();
    match cli.command {
        Commands::Rules {
            action: Some(RulesAction::Add { keyword, category }),
        } => {
            assert_eq!(keyword, "starbucks");
            assert_eq!(category, "Dining");
        }
        _ => panic!("expected rules add"),
    }
}

#[test]
fn test_parse_budgets_set_with_global_flags() {
    let cli = Cli::try_parse_from([
        "tally",
        "budgets",
        "set",
        "Dining",
        "250",
        "--month",
        "2024-03",
        "--no-encrypt",
        "--db",
        "other.db",
    ])
    .unwrap();

    assert!(cli.no_encrypt);
    assert_eq!(cli.db.to_str(), Some("other.db"));
    match cli.command {
        Commands::Budgets {
            action:
                Some(BudgetsAction::Set {
                    category,
                    limit,
                    month,
                }),
        } => {
            assert_eq!(category, "Dining");
            assert_eq!(limit, 250.0);
            assert_eq!(month.as_deref(), Some("2024-03"));
        }
        _ => panic!("expected budgets set"),
    }
}

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["tally", "insights"]).unwrap();
    assert_eq!(cli.db.to_str(), Some("tally.db"));
    assert!(!cli.verbose);
    match cli.command {
        Commands::Insights { month, json } => {
            assert!(month.is_none());
            assert!(!json);
        }
        _ => panic!("expected insights"),
    }
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    assert_eq!(truncate("this is too long", 10), "this is...");
    assert_eq!(truncate("café au lait", 7), "café...");
}
