//! Category rule operations

use rusqlite::params;

use super::{datetime_column, Database};
use crate::error::{Error, Result};
use crate::models::CategoryRule;
use crate::validate::validate_rule;

impl Database {
    /// Append a rule; it is matched after every existing rule
    pub fn create_rule(&self, keyword: &str, category: &str) -> Result<i64> {
        validate_rule(keyword, category)?;
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO category_rules (keyword, category) VALUES (?, ?)",
            params![keyword, category],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List all rules in match order
    pub fn list_rules(&self) -> Result<Vec<CategoryRule>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, keyword, category, created_at FROM category_rules ORDER BY id",
        )?;

        let rules = stmt
            .query_map([], |row| {
                Ok(CategoryRule {
                    id: row.get(0)?,
                    keyword: row.get(1)?,
                    category: row.get(2)?,
                    created_at: datetime_column(row, 3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rules)
    }

    /// Delete a rule
    pub fn delete_rule(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM category_rules WHERE id = ?", params![id])?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("rule {}", id)));
        }
        Ok(())
    }
}
