//! Database access layer with connection pooling and migrations
//!
//! This module is organized by table:
//! - `expenses` - Expense CRUD and filtered listing
//! - `income` - Income CRUD
//! - `budgets` - Budget CRUD (one budget per category)
//! - `goals` - Savings goal CRUD
//! - `investments` - Investment CRUD
//! - `debts` - Debt CRUD

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::types::Type;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{EntityKind, RecordCounts};

mod budgets;
mod debts;
mod expenses;
mod goals;
mod income;
mod investments;

pub use expenses::ExpenseFilter;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Storage format for calendar dates
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Decode a DATE column, failing the row rather than guessing
pub(crate) fn date_column(idx: usize, value: String) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })
}

/// Decode an enum column stored as its display string
pub(crate) fn enum_column<T>(idx: usize, value: String) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    value.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })
}

/// Turn "no row deleted" into a NotFound error
pub(crate) fn ensure_deleted(kind: EntityKind, id: i64, rows: usize) -> Result<()> {
    if rows == 0 {
        return Err(Error::NotFound(format!("{} record {} not found", kind, id)));
    }
    Ok(())
}

/// True when an insert hit a UNIQUE or PRIMARY KEY constraint
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Open (or create) the database at `path` and run migrations
    pub fn new(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            Ok(())
        });
        let pool = Pool::builder().max_size(8).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Uses a temporary file rather than `:memory:` because every pooled
    /// connection to `:memory:` would see its own empty database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "finhub_test_{}_{}.db",
            std::process::id(),
            id
        ));

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::new(&path.to_string_lossy())
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Delete every record in every table
    pub fn clear_all(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(
            r#"
            DELETE FROM expenses;
            DELETE FROM income;
            DELETE FROM budgets;
            DELETE FROM savings_goals;
            DELETE FROM investments;
            DELETE FROM debts;
            "#,
        )?;

        info!("All records cleared");
        Ok(())
    }

    /// Count rows in each table
    pub fn record_counts(&self) -> Result<RecordCounts> {
        let conn = self.conn()?;
        let count = |kind: EntityKind| -> Result<i64> {
            let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
            Ok(conn.query_row(&sql, [], |row| row.get(0))?)
        };

        Ok(RecordCounts {
            expenses: count(EntityKind::Expenses)?,
            income: count(EntityKind::Income)?,
            budgets: count(EntityKind::Budgets)?,
            goals: count(EntityKind::Goals)?,
            investments: count(EntityKind::Investments)?,
            debts: count(EntityKind::Debts)?,
        })
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- WAL mode: readers don't block writers
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;

            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY,
                date DATE NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL CHECK (amount >= 0),
                payment_method TEXT NOT NULL,
                description TEXT NOT NULL,
                notes TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
            CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);

            CREATE TABLE IF NOT EXISTS income (
                id INTEGER PRIMARY KEY,
                date DATE NOT NULL,
                amount REAL NOT NULL CHECK (amount >= 0),
                source TEXT NOT NULL,
                type TEXT NOT NULL,
                notes TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_income_date ON income(date);

            -- One budget per category
            CREATE TABLE IF NOT EXISTS budgets (
                id INTEGER PRIMARY KEY,
                category TEXT NOT NULL UNIQUE,
                monthly_limit REAL NOT NULL CHECK (monthly_limit > 0),
                rollover_enabled BOOLEAN NOT NULL DEFAULT 0,
                notes TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS savings_goals (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                target_amount REAL NOT NULL CHECK (target_amount > 0),
                current_amount REAL NOT NULL DEFAULT 0,
                monthly_contribution REAL NOT NULL DEFAULT 0,
                target_date DATE NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS investments (
                id INTEGER PRIMARY KEY,
                date DATE NOT NULL,
                type TEXT NOT NULL,
                amount_invested REAL NOT NULL CHECK (amount_invested > 0),
                current_value REAL NOT NULL CHECK (current_value >= 0),
                platform TEXT NOT NULL DEFAULT '',
                notes TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_investments_date ON investments(date);

            CREATE TABLE IF NOT EXISTS debts (
                id INTEGER PRIMARY KEY,
                type TEXT NOT NULL,
                lender TEXT NOT NULL,
                interest_rate REAL NOT NULL CHECK (interest_rate >= 0),
                outstanding_amount REAL NOT NULL CHECK (outstanding_amount >= 0),
                monthly_emi REAL NOT NULL DEFAULT 0,
                due_date INTEGER NOT NULL CHECK (due_date BETWEEN 1 AND 31),
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;

        info!(path = %self.db_path, "Database migrations complete");
        Ok(())
    }
}
