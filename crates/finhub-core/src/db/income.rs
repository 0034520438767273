//! Income operations

use rusqlite::{params, Row};

use super::{date_column, ensure_deleted, enum_column, parse_datetime, Database, DATE_FORMAT};
use crate::error::{Error, Result};
use crate::models::{EntityKind, Income, NewIncome};

fn row_to_income(row: &Row) -> rusqlite::Result<Income> {
    let created_at: String = row.get(6)?;
    Ok(Income {
        id: row.get(0)?,
        date: date_column(1, row.get(1)?)?,
        amount: row.get(2)?,
        source: enum_column(3, row.get(3)?)?,
        income_type: enum_column(4, row.get(4)?)?,
        notes: row.get(5)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Insert a validated income entry and return the stored record
    pub fn insert_income(&self, income: &NewIncome) -> Result<Income> {
        income.validate()?;
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO income (date, amount, source, type, notes) VALUES (?, ?, ?, ?, ?)",
            params![
                income.date.format(DATE_FORMAT).to_string(),
                income.amount,
                income.source.as_str(),
                income.income_type.as_str(),
                income.notes,
            ],
        )?;

        let id = conn.last_insert_rowid();
        drop(conn);
        self.get_income(id)?
            .ok_or_else(|| Error::NotFound(format!("income record {} not found", id)))
    }

    /// Get an income entry by ID
    pub fn get_income(&self, id: i64) -> Result<Option<Income>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, amount, source, type, notes, created_at FROM income WHERE id = ?",
        )?;
        let mut rows = stmt.query_map(params![id], row_to_income)?;
        Ok(rows.next().transpose()?)
    }

    /// List all income, newest first
    pub fn list_income(&self) -> Result<Vec<Income>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, amount, source, type, notes, created_at
            FROM income
            ORDER BY date DESC, id DESC
            "#,
        )?;

        let income = stmt
            .query_map([], row_to_income)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(income)
    }

    /// Delete an income entry
    pub fn delete_income(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM income WHERE id = ?", params![id])?;
        ensure_deleted(EntityKind::Income, id, rows)
    }
}
