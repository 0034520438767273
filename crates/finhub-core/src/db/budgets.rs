//! Budget operations
//!
//! A category has at most one budget; inserting a second is a conflict.

use rusqlite::{params, Row};
use tracing::debug;

use super::{ensure_deleted, enum_column, is_unique_violation, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Budget, EntityKind, ExpenseCategory, NewBudget};

fn row_to_budget(row: &Row) -> rusqlite::Result<Budget> {
    let created_at: String = row.get(5)?;
    Ok(Budget {
        id: row.get(0)?,
        category: enum_column(1, row.get(1)?)?,
        monthly_limit: row.get(2)?,
        rollover_enabled: row.get(3)?,
        notes: row.get(4)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Insert a validated budget and return the stored record
    pub fn insert_budget(&self, budget: &NewBudget) -> Result<Budget> {
        budget.validate()?;

        // The UNIQUE(category) constraint decides, so concurrent inserts can't both win
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO budgets (category, monthly_limit, rollover_enabled, notes) VALUES (?, ?, ?, ?)",
            params![
                budget.category.as_str(),
                budget.monthly_limit,
                budget.rollover_enabled,
                budget.notes,
            ],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::Conflict(format!("a budget for {} already exists", budget.category))
            } else {
                Error::from(e)
            }
        })?;

        let id = conn.last_insert_rowid();
        drop(conn);
        debug!(id, category = %budget.category, "Created budget");

        self.get_budget(id)?
            .ok_or_else(|| Error::NotFound(format!("budgets record {} not found", id)))
    }

    /// Get a budget by ID
    pub fn get_budget(&self, id: i64) -> Result<Option<Budget>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, category, monthly_limit, rollover_enabled, notes, created_at FROM budgets WHERE id = ?",
        )?;
        let mut rows = stmt.query_map(params![id], row_to_budget)?;
        Ok(rows.next().transpose()?)
    }

    /// Get the budget for a category, if one exists
    pub fn get_budget_by_category(&self, category: ExpenseCategory) -> Result<Option<Budget>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, category, monthly_limit, rollover_enabled, notes, created_at FROM budgets WHERE category = ?",
        )?;
        let mut rows = stmt.query_map(params![category.as_str()], row_to_budget)?;
        Ok(rows.next().transpose()?)
    }

    /// List all budgets, alphabetical by category
    pub fn list_budgets(&self) -> Result<Vec<Budget>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, category, monthly_limit, rollover_enabled, notes, created_at FROM budgets ORDER BY category",
        )?;

        let budgets = stmt
            .query_map([], row_to_budget)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(budgets)
    }

    /// Delete a budget
    pub fn delete_budget(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM budgets WHERE id = ?", params![id])?;
        ensure_deleted(EntityKind::Budgets, id, rows)
    }
}
