//! Savings goal operations

use rusqlite::{params, Row};

use super::{date_column, ensure_deleted, parse_datetime, Database, DATE_FORMAT};
use crate::error::{Error, Result};
use crate::models::{EntityKind, NewSavingsGoal, SavingsGoal};

const GOAL_COLUMNS: &str =
    "id, name, target_amount, current_amount, monthly_contribution, target_date, created_at";

fn row_to_goal(row: &Row) -> rusqlite::Result<SavingsGoal> {
    let created_at: String = row.get(6)?;
    Ok(SavingsGoal {
        id: row.get(0)?,
        name: row.get(1)?,
        target_amount: row.get(2)?,
        current_amount: row.get(3)?,
        monthly_contribution: row.get(4)?,
        target_date: date_column(5, row.get(5)?)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Insert a validated savings goal and return the stored record
    pub fn insert_goal(&self, goal: &NewSavingsGoal) -> Result<SavingsGoal> {
        goal.validate()?;
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO savings_goals (name, target_amount, current_amount, monthly_contribution, target_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                goal.name.trim(),
                goal.target_amount,
                goal.current_amount,
                goal.monthly_contribution,
                goal.target_date.format(DATE_FORMAT).to_string(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        drop(conn);
        self.get_goal(id)?
            .ok_or_else(|| Error::NotFound(format!("goals record {} not found", id)))
    }

    /// Get a savings goal by ID
    pub fn get_goal(&self, id: i64) -> Result<Option<SavingsGoal>> {
        let conn = self.conn()?;
        let sql = format!("SELECT {} FROM savings_goals WHERE id = ?", GOAL_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query_map(params![id], row_to_goal)?;
        Ok(rows.next().transpose()?)
    }

    /// List goals, nearest deadline first
    pub fn list_goals(&self) -> Result<Vec<SavingsGoal>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {} FROM savings_goals ORDER BY target_date, id",
            GOAL_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        let goals = stmt
            .query_map([], row_to_goal)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    /// Delete a savings goal
    pub fn delete_goal(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM savings_goals WHERE id = ?", params![id])?;
        ensure_deleted(EntityKind::Goals, id, rows)
    }
}
