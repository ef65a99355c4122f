//! Transaction operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::{datetime_column, format_datetime, Database};
use crate::error::Result;
use crate::models::{NewTransaction, Transaction};

const TRANSACTION_COLUMNS: &str =
    "id, amount, merchant, description, category, date, account, currency, created_at";

fn row_to_transaction(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        merchant: row.get(2)?,
        description: row.get(3)?,
        category: row.get(4)?,
        date: datetime_column(row, 5)?,
        account: row.get(6)?,
        currency: row.get(7)?,
        created_at: datetime_column(row, 8)?,
    })
}

impl Database {
    /// Insert a transaction as given (no validation or categorization)
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO transactions (amount, merchant, description, category, date, account, currency)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                tx.amount,
                tx.merchant,
                tx.description,
                tx.category,
                format_datetime(&tx.date),
                tx.account,
                tx.currency,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let sql = format!("SELECT {} FROM transactions WHERE id = ?", TRANSACTION_COLUMNS);

        let tx = conn
            .query_row(&sql, params![id], row_to_transaction)
            .optional()?;

        Ok(tx)
    }

    /// Most recently created transaction with this merchant and amount
    pub fn find_latest_transaction(&self, merchant: &str, amount: f64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {} FROM transactions WHERE merchant = ? AND amount = ? ORDER BY created_at DESC, id DESC LIMIT 1",
            TRANSACTION_COLUMNS
        );

        let tx = conn
            .query_row(&sql, params![merchant, amount], row_to_transaction)
            .optional()?;

        Ok(tx)
    }

    /// List transactions newest first, optionally limited to one category
    pub fn list_transactions(&self, limit: i64, category: Option<&str>) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;

        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(c) = category {
            conditions.push("category = ?");
            params.push(Box::new(c.to_string()));
        }
        params.push(Box::new(limit));

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM transactions {} ORDER BY date DESC, id DESC LIMIT ?",
            TRANSACTION_COLUMNS, where_clause
        );

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let transactions = stmt
            .query_map(params_refs.as_slice(), row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Transactions with `start <= date < end`, oldest first
    pub fn transactions_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {} FROM transactions WHERE date >= ? AND date < ? ORDER BY date, id",
            TRANSACTION_COLUMNS
        );

        let mut stmt = conn.prepare(&sql)?;
        let transactions = stmt
            .query_map(
                params![format_datetime(&start), format_datetime(&end)],
                row_to_transaction,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Count all transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }
}
