//! Debt operations

use rusqlite::{params, Row};

use super::{ensure_deleted, enum_column, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Debt, EntityKind, NewDebt};

const DEBT_COLUMNS: &str =
    "id, type, lender, interest_rate, outstanding_amount, monthly_emi, due_date, created_at";

fn row_to_debt(row: &Row) -> rusqlite::Result<Debt> {
    let created_at: String = row.get(7)?;
    Ok(Debt {
        id: row.get(0)?,
        debt_type: enum_column(1, row.get(1)?)?,
        lender: row.get(2)?,
        interest_rate: row.get(3)?,
        outstanding_amount: row.get(4)?,
        monthly_emi: row.get(5)?,
        due_date: row.get(6)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Insert a validated debt and return the stored record
    pub fn insert_debt(&self, debt: &NewDebt) -> Result<Debt> {
        debt.validate()?;
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO debts (type, lender, interest_rate, outstanding_amount, monthly_emi, due_date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                debt.debt_type.as_str(),
                debt.lender.trim(),
                debt.interest_rate,
                debt.outstanding_amount,
                debt.monthly_emi,
                debt.due_date,
            ],
        )?;

        let id = conn.last_insert_rowid();
        drop(conn);
        self.get_debt(id)?
            .ok_or_else(|| Error::NotFound(format!("debts record {} not found", id)))
    }

    /// Get a debt by ID
    pub fn get_debt(&self, id: i64) -> Result<Option<Debt>> {
        let conn = self.conn()?;
        let sql = format!("SELECT {} FROM debts WHERE id = ?", DEBT_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query_map(params![id], row_to_debt)?;
        Ok(rows.next().transpose()?)
    }

    /// List debts by day of month due
    pub fn list_debts(&self) -> Result<Vec<Debt>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {} FROM debts ORDER BY due_date, id",
            DEBT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        let debts = stmt
            .query_map([], row_to_debt)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(debts)
    }

    /// Delete a debt
    pub fn delete_debt(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM debts WHERE id = ?", params![id])?;
        ensure_deleted(EntityKind::Debts, id, rows)
    }
}
