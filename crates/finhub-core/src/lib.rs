//! FinHub Core Library
//!
//! Shared functionality for the FinHub personal finance tracker:
//! - SQLite record store for expenses, income, budgets, goals, investments
//!   and debts
//! - Pure analytics over a snapshot of records (calendar-month aggregation,
//!   budget status, goal progress, EMI)
//! - Rule-based insight engine producing advisory findings
//! - CSV export and full JSON backup/restore

pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod format;
pub mod insights;
pub mod models;
pub mod store;

pub use analytics::Period;
pub use config::FinhubConfig;
pub use db::{Database, ExpenseFilter};
pub use error::{Error, Result};
pub use export::{BackupMetadata, FullBackup};
pub use format::format_currency;
pub use insights::{Finding, InsightEngine, InsightType, Severity};
pub use models::EntityKind;
pub use store::{RecordStore, Snapshot};
