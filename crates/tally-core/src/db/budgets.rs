//! Budget operations

use rusqlite::params;

use super::{datetime_column, Database};
use crate::error::Result;
use crate::models::Budget;
use crate::month::Month;
use crate::validate::validate_budget;

impl Database {
    /// Record a budget for a category and month
    ///
    /// Always inserts; an older budget for the same pair is kept but shadowed.
    pub fn set_budget(&self, category: &str, month: &str, limit: f64) -> Result<i64> {
        let month = validate_budget(category, month, limit)?;
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO budgets (category, month, limit_amount) VALUES (?, ?, ?)",
            params![category, month.to_string(), limit],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List budgets in creation order, optionally for a single month
    pub fn list_budgets(&self, month: Option<&Month>) -> Result<Vec<Budget>> {
        let conn = self.conn()?;
        let map_row = |row: &rusqlite::Row<'_>| {
            Ok(Budget {
                id: row.get(0)?,
                category: row.get(1)?,
                month: row.get(2)?,
                limit: row.get(3)?,
                created_at: datetime_column(row, 4)?,
            })
        };

        let budgets = match month {
            Some(m) => {
                let mut stmt = conn.prepare(
                    "SELECT id, category, month, limit_amount, created_at FROM budgets WHERE month = ? ORDER BY id",
                )?;
                let rows = stmt
                    .query_map(params![m.to_string()], map_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, category, month, limit_amount, created_at FROM budgets ORDER BY month, id",
                )?;
                let rows = stmt
                    .query_map([], map_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                rows
            }
        };

        Ok(budgets)
    }
}
