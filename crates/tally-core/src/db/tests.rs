//! Database tests

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rusqlite::params;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    #[test]
    fn test_in_memory_db() {
        let db = Database::in_memory().unwrap();
        assert!(db.list_rules().unwrap().is_empty());
        assert!(db.list_budgets(None).unwrap().is_empty());
        assert_eq!(db.count_transactions().unwrap(), 0);
    }

    #[test]
    fn test_schema_tables() {
        let db = Database::in_memory().unwrap();
        let tables = db.list_tables().unwrap();
        for name in ["audit_log", "budgets", "category_rules", "transactions"] {
            assert!(tables.contains(&name.to_string()), "missing table {}", name);
        }
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let db = Database::in_memory().unwrap();
        db.create_rule("coffee", "Food & Drink").unwrap();

        // Reopening the same file re-runs migrations without losing data
        let reopened = Database::new_unencrypted(db.path()).unwrap();
        assert_eq!(reopened.list_rules().unwrap().len(), 1);
    }

    #[test]
    fn test_transactions_table_constraints() {
        let db = Database::in_memory().unwrap();
        let conn = db.conn().unwrap();

        let result = conn.execute(
            "INSERT INTO transactions (amount, merchant, date) VALUES (?, ?, ?)",
            params![-5.0, "Refund", "2024-03-01 00:00:00"],
        );
        assert!(result.is_err(), "Should reject non-positive amount");

        let result = conn.execute(
            "INSERT INTO budgets (category, month, limit_amount) VALUES (?, ?, ?)",
            params!["Groceries", "2024-03", 0.0],
        );
        assert!(result.is_err(), "Should reject zero budget limit");
    }

    #[test]
    fn test_insert_and_get_transaction() {
        let db = Database::in_memory().unwrap();
        let mut tx = NewTransaction::new(12.5, "Corner Cafe", at(2024, 3, 5, 8, 30, 0));
        tx.description = Some("latte".to_string());
        tx.account = Some("Checking".to_string());

        let id = db.insert_transaction(&tx).unwrap();
        assert!(id > 0);

        let stored = db.get_transaction(id).unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.amount, 12.5);
        assert_eq!(stored.merchant, "Corner Cafe");
        assert_eq!(stored.description.as_deref(), Some("latte"));
        assert_eq!(stored.category, None);
        assert_eq!(stored.date, at(2024, 3, 5, 8, 30, 0));
        assert_eq!(stored.account.as_deref(), Some("Checking"));
        assert_eq!(stored.currency, "USD");

        assert!(db.get_transaction(id + 100).unwrap().is_none());
    }

    #[test]
    fn test_fractional_seconds_round_trip() {
        let db = Database::in_memory().unwrap();
        let date = at(2024, 3, 5, 8, 30, 0) + chrono::Duration::milliseconds(250);
        let id = db
            .insert_transaction(&NewTransaction::new(1.0, "Kiosk", date))
            .unwrap();
        assert_eq!(db.get_transaction(id).unwrap().unwrap().date, date);
    }

    #[test]
    fn test_find_latest_transaction() {
        let db = Database::in_memory().unwrap();
        let date = at(2024, 3, 5, 12, 0, 0);

        let first = db.insert_transaction(&NewTransaction::new(9.99, "Streamer", date)).unwrap();
        let second = db.insert_transaction(&NewTransaction::new(9.99, "Streamer", date)).unwrap();
        db.insert_transaction(&NewTransaction::new(4.0, "Streamer", date)).unwrap();

        let latest = db.find_latest_transaction("Streamer", 9.99).unwrap().unwrap();
        assert_eq!(latest.id, second);
        assert_ne!(latest.id, first);

        assert!(db.find_latest_transaction("Nobody", 9.99).unwrap().is_none());
    }

    #[test]
    fn test_list_transactions_order_limit_and_filter() {
        let db = Database::in_memory().unwrap();

        let mut rent = NewTransaction::new(1200.0, "Landlord", at(2024, 3, 1, 9, 0, 0));
        rent.category = Some("Housing".to_string());
        let mut lunch = NewTransaction::new(14.0, "Deli", at(2024, 3, 10, 12, 0, 0));
        lunch.category = Some("Dining".to_string());
        let mut dinner = NewTransaction::new(40.0, "Bistro", at(2024, 3, 12, 19, 0, 0));
        dinner.category = Some("Dining".to_string());

        for tx in [&rent, &lunch, &dinner] {
            db.insert_transaction(tx).unwrap();
        }

        let all = db.list_transactions(100, None).unwrap();
        let merchants: Vec<&str> = all.iter().map(|t| t.merchant.as_str()).collect();
        assert_eq!(merchants, vec!["Bistro", "Deli", "Landlord"]);

        let limited = db.list_transactions(1, None).unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].merchant, "Bistro");

        let dining = db.list_transactions(100, Some("Dining")).unwrap();
        assert_eq!(dining.len(), 2);
        assert!(dining.iter().all(|t| t.category.as_deref() == Some("Dining")));

        assert!(db.list_transactions(100, Some("Travel")).unwrap().is_empty());
    }

    #[test]
    fn test_transactions_between_is_half_open() {
        let db = Database::in_memory().unwrap();
        let dates = [
            at(2024, 2, 29, 23, 59, 59),
            at(2024, 3, 1, 0, 0, 0),
            at(2024, 3, 31, 23, 59, 59),
            at(2024, 4, 1, 0, 0, 0),
        ];
        for date in dates {
            db.insert_transaction(&NewTransaction::new(1.0, "Shop", date)).unwrap();
        }

        let (start, end) = month("2024-03").bounds();
        let march = db.transactions_between(start, end).unwrap();
        let got: Vec<DateTime<Utc>> = march.iter().map(|t| t.date).collect();
        assert_eq!(got, vec![dates[1], dates[2]]);
    }

    #[test]
    fn test_rule_crud() {
        let db = Database::in_memory().unwrap();

        let coffee = db.create_rule("coffee", "Food & Drink").unwrap();
        let uber = db.create_rule("uber", "Transport").unwrap();
        assert!(uber > coffee);

        let rules = db.list_rules().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].keyword, "coffee");
        assert_eq!(rules[1].category, "Transport");

        db.delete_rule(coffee).unwrap();
        let rules = db.list_rules().unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, uber);

        assert!(matches!(db.delete_rule(coffee), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_rule_requires_category() {
        let db = Database::in_memory().unwrap();
        assert!(matches!(
            db.create_rule("coffee", "  "),
            Err(Error::Validation(_))
        ));
        assert!(db.list_rules().unwrap().is_empty());
    }

    #[test]
    fn test_budget_set_and_list() {
        let db = Database::in_memory().unwrap();

        let first = db.set_budget("Groceries", "2024-03", 100.0).unwrap();
        let second = db.set_budget("Groceries", "2024-03", 150.0).unwrap();
        db.set_budget("Travel", "2024-04", 500.0).unwrap();
        assert!(second > first);

        let march = db.list_budgets(Some(&month("2024-03"))).unwrap();
        assert_eq!(march.len(), 2);
        assert_eq!(march[0].limit, 100.0);
        assert_eq!(march[1].limit, 150.0);
        assert!(march.iter().all(|b| b.month == "2024-03"));

        assert_eq!(db.list_budgets(None).unwrap().len(), 3);
        assert!(db.list_budgets(Some(&month("2024-05"))).unwrap().is_empty());
    }

    #[test]
    fn test_budget_validation() {
        let db = Database::in_memory().unwrap();
        assert!(matches!(
            db.set_budget("Groceries", "2024-3", 100.0),
            Err(Error::MalformedMonth(_))
        ));
        assert!(matches!(
            db.set_budget("Groceries", "2024-03", -1.0),
            Err(Error::Validation(_))
        ));
        assert!(db.list_budgets(None).unwrap().is_empty());
    }

    #[test]
    fn test_spend_store_impl() {
        let db = Database::in_memory().unwrap();
        db.create_rule("coffee", "Food & Drink").unwrap();
        db.set_budget("Food & Drink", "2024-03", 50.0).unwrap();
        db.set_budget("Food & Drink", "2024-04", 50.0).unwrap();

        let store: &dyn SpendStore = &db;
        assert_eq!(store.category_rules().unwrap().len(), 1);

        let budgets = store.budgets_for_month(&month("2024-03")).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].month, "2024-03");
    }

    #[test]
    fn test_audit_log() {
        let db = Database::in_memory().unwrap();

        db.log_audit("api", "create_rule", Some("rule"), Some(1), Some("coffee"))
            .unwrap();
        db.log_audit("alice@example.com", "list_transactions", None, None, None)
            .unwrap();

        let entries = db.list_audit_log(10).unwrap();
        assert_eq!(entries.len(), 2);
        // Same-second timestamps fall back to id order
        assert_eq!(entries[0].action, "list_transactions");
        assert_eq!(entries[1].entity_type.as_deref(), Some("rule"));
        assert_eq!(entries[1].details.as_deref(), Some("coffee"));

        assert_eq!(db.list_audit_log(1).unwrap().len(), 1);
    }

    #[test]
    fn test_unencrypted_db_reports_not_encrypted() {
        // Independent of whether TALLY_DB_KEY happens to be set
        let db = Database::in_memory().unwrap();
        assert!(!db.is_encrypted());

        let reopened = Database::new_unencrypted(db.path()).unwrap();
        assert!(!reopened.is_encrypted());
    }

    #[test]
    fn test_keyed_db_reports_encrypted() {
        let path = std::env::temp_dir().join(format!("tally_keyed_{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let db = Database::new_with_key(&path.to_string_lossy(), Some("correct horse")).unwrap();
        assert!(db.is_encrypted());
        db.create_rule("coffee", "Dining").unwrap();
        assert_eq!(db.list_rules().unwrap().len(), 1);

        drop(db);
        let _ = std::fs::remove_file(&path);
    }
}
