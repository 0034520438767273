//! Export functionality for records and full database backups
//!
//! Supports:
//! - Per-table CSV export (one row per record, headers from field names)
//! - Full JSON backup export/import of all six tables

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::{Database, DATE_FORMAT};
use crate::error::{Error, Result};
use crate::models::{
    Budget, Debt, EntityKind, Expense, Income, Investment, NewBudget, NewDebt, NewExpense,
    NewIncome, NewInvestment, NewSavingsGoal, RecordCounts, SavingsGoal,
};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Backup metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupMetadata {
    /// Application version that created the backup
    pub version: String,
    /// When the backup was created
    pub created_at: String,
    /// Total number of records in backup
    pub total_records: i64,
}

/// Full database backup structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullBackup {
    pub metadata: BackupMetadata,
    pub expenses: Vec<Expense>,
    pub income: Vec<Income>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingsGoal>,
    pub investments: Vec<Investment>,
    pub debts: Vec<Debt>,
}

impl FullBackup {
    fn counts(&self) -> RecordCounts {
        RecordCounts {
            expenses: self.expenses.len() as i64,
            income: self.income.len() as i64,
            budgets: self.budgets.len() as i64,
            goals: self.goals.len() as i64,
            investments: self.investments.len() as i64,
            debts: self.debts.len() as i64,
        }
    }

    /// Check every record against the same rules as a fresh insert
    ///
    /// Duplicate budget categories are a conflict; duplicate ids within a
    /// table are invalid data.
    pub fn validate(&self) -> Result<()> {
        check_records(EntityKind::Expenses, &self.expenses, |e| e.id, |e| {
            NewExpense::from(e).validate()
        })?;
        check_records(EntityKind::Income, &self.income, |i| i.id, |i| {
            NewIncome::from(i).validate()
        })?;
        check_records(EntityKind::Budgets, &self.budgets, |b| b.id, |b| {
            NewBudget::from(b).validate()
        })?;
        check_records(EntityKind::Goals, &self.goals, |g| g.id, |g| {
            NewSavingsGoal::from(g).validate()
        })?;
        check_records(EntityKind::Investments, &self.investments, |i| i.id, |i| {
            NewInvestment::from(i).validate()
        })?;
        check_records(EntityKind::Debts, &self.debts, |d| d.id, |d| {
            NewDebt::from(d).validate()
        })?;

        let mut categories = HashSet::new();
        for budget in &self.budgets {
            if !categories.insert(budget.category) {
                return Err(Error::Conflict(format!(
                    "backup has more than one budget for {}",
                    budget.category
                )));
            }
        }

        Ok(())
    }

    /// Write as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn check_records<T>(
    kind: EntityKind,
    records: &[T],
    id: impl Fn(&T) -> i64,
    validate: impl Fn(&T) -> Result<()>,
) -> Result<()> {
    let mut ids = HashSet::new();
    for record in records {
        let record_id = id(record);
        if !ids.insert(record_id) {
            return Err(Error::InvalidData(format!(
                "backup has duplicate {} id {}",
                kind, record_id
            )));
        }
        validate(record).map_err(|e| match e {
            Error::InvalidData(msg) => {
                Error::InvalidData(format!("{} record {}: {}", kind, record_id, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}

fn to_csv<T: Serialize>(records: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(e.to_string()))
}

impl Database {
    /// Export one table as CSV (empty string when the table is empty)
    pub fn export_csv(&self, kind: EntityKind) -> Result<String> {
        match kind {
            EntityKind::Expenses => to_csv(&self.list_expenses()?),
            EntityKind::Income => to_csv(&self.list_income()?),
            EntityKind::Budgets => to_csv(&self.list_budgets()?),
            EntityKind::Goals => to_csv(&self.list_goals()?),
            EntityKind::Investments => to_csv(&self.list_investments()?),
            EntityKind::Debts => to_csv(&self.list_debts()?),
        }
    }

    /// Export every table
    pub fn export_full_backup(&self) -> Result<FullBackup> {
        let mut backup = FullBackup {
            metadata: BackupMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: Utc::now().to_rfc3339(),
                total_records: 0,
            },
            expenses: self.list_expenses()?,
            income: self.list_income()?,
            budgets: self.list_budgets()?,
            goals: self.list_goals()?,
            investments: self.list_investments()?,
            debts: self.list_debts()?,
        };
        backup.metadata.total_records = backup.counts().total();

        info!(records = backup.metadata.total_records, "Exported full backup");
        Ok(backup)
    }

    /// Restore a backup, keeping record ids and creation times
    ///
    /// With `clear_existing` every table is emptied first; otherwise the
    /// database must already be empty. The import is all-or-nothing.
    pub fn import_full_backup(
        &self,
        backup: &FullBackup,
        clear_existing: bool,
    ) -> Result<RecordCounts> {
        backup.validate()?;

        if !clear_existing && self.record_counts()?.total() > 0 {
            return Err(Error::Conflict(
                "database is not empty; clear it before restoring".to_string(),
            ));
        }

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        if clear_existing {
            for kind in EntityKind::all() {
                tx.execute(&format!("DELETE FROM {}", kind.table()), [])?;
            }
        }

        for e in &backup.expenses {
            tx.execute(
                "INSERT INTO expenses (id, date, category, amount, payment_method, description, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    e.id,
                    e.date.format(DATE_FORMAT).to_string(),
                    e.category.as_str(),
                    e.amount,
                    e.payment_method.as_str(),
                    e.description,
                    e.notes,
                    e.created_at.format(DATETIME_FORMAT).to_string(),
                ],
            )?;
        }

        for i in &backup.income {
            tx.execute(
                "INSERT INTO income (id, date, amount, source, type, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    i.id,
                    i.date.format(DATE_FORMAT).to_string(),
                    i.amount,
                    i.source.as_str(),
                    i.income_type.as_str(),
                    i.notes,
                    i.created_at.format(DATETIME_FORMAT).to_string(),
                ],
            )?;
        }

        for b in &backup.budgets {
            tx.execute(
                "INSERT INTO budgets (id, category, monthly_limit, rollover_enabled, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    b.id,
                    b.category.as_str(),
                    b.monthly_limit,
                    b.rollover_enabled,
                    b.notes,
                    b.created_at.format(DATETIME_FORMAT).to_string(),
                ],
            )?;
        }

        for g in &backup.goals {
            tx.execute(
                "INSERT INTO savings_goals (id, name, target_amount, current_amount, monthly_contribution, target_date, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    g.id,
                    g.name,
                    g.target_amount,
                    g.current_amount,
                    g.monthly_contribution,
                    g.target_date.format(DATE_FORMAT).to_string(),
                    g.created_at.format(DATETIME_FORMAT).to_string(),
                ],
            )?;
        }

        for inv in &backup.investments {
            tx.execute(
                "INSERT INTO investments (id, date, type, amount_invested, current_value, platform, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    inv.id,
                    inv.date.format(DATE_FORMAT).to_string(),
                    inv.investment_type.as_str(),
                    inv.amount_invested,
                    inv.current_value,
                    inv.platform,
                    inv.notes,
                    inv.created_at.format(DATETIME_FORMAT).to_string(),
                ],
            )?;
        }

        for d in &backup.debts {
            tx.execute(
                "INSERT INTO debts (id, type, lender, interest_rate, outstanding_amount, monthly_emi, due_date, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    d.id,
                    d.debt_type.as_str(),
                    d.lender,
                    d.interest_rate,
                    d.outstanding_amount,
                    d.monthly_emi,
                    d.due_date,
                    d.created_at.format(DATETIME_FORMAT).to_string(),
                ],
            )?;
        }

        tx.commit()?;

        let stats = backup.counts();
        info!(records = stats.total(), "Imported full backup");
        Ok(stats)
    }
}
