//! Investment operations

use rusqlite::{params, Row};

use super::{date_column, ensure_deleted, enum_column, parse_datetime, Database, DATE_FORMAT};
use crate::error::{Error, Result};
use crate::models::{EntityKind, Investment, NewInvestment};

const INVESTMENT_COLUMNS: &str =
    "id, date, type, amount_invested, current_value, platform, notes, created_at";

fn row_to_investment(row: &Row) -> rusqlite::Result<Investment> {
    let created_at: String = row.get(7)?;
    Ok(Investment {
        id: row.get(0)?,
        date: date_column(1, row.get(1)?)?,
        investment_type: enum_column(2, row.get(2)?)?,
        amount_invested: row.get(3)?,
        current_value: row.get(4)?,
        platform: row.get(5)?,
        notes: row.get(6)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Insert a validated investment and return the stored record
    pub fn insert_investment(&self, investment: &NewInvestment) -> Result<Investment> {
        investment.validate()?;
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO investments (date, type, amount_invested, current_value, platform, notes)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                investment.date.format(DATE_FORMAT).to_string(),
                investment.investment_type.as_str(),
                investment.amount_invested,
                investment.current_value,
                investment.platform.trim(),
                investment.notes,
            ],
        )?;

        let id = conn.last_insert_rowid();
        drop(conn);
        self.get_investment(id)?
            .ok_or_else(|| Error::NotFound(format!("investments record {} not found", id)))
    }

    /// Get an investment by ID
    pub fn get_investment(&self, id: i64) -> Result<Option<Investment>> {
        let conn = self.conn()?;
        let sql = format!("SELECT {} FROM investments WHERE id = ?", INVESTMENT_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query_map(params![id], row_to_investment)?;
        Ok(rows.next().transpose()?)
    }

    /// List all investments, newest first
    pub fn list_investments(&self) -> Result<Vec<Investment>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {} FROM investments ORDER BY date DESC, id DESC",
            INVESTMENT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        let investments = stmt
            .query_map([], row_to_investment)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(investments)
    }

    /// Delete an investment
    pub fn delete_investment(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM investments WHERE id = ?", params![id])?;
        ensure_deleted(EntityKind::Investments, id, rows)
    }
}
