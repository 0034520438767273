//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` / `load_config` - Shared setup used by every command
//! - `cmd_init` - Initialize the database
//! - `cmd_delete` - Delete one record of any kind

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use finhub_core::{Database, EntityKind, FinhubConfig, Period, RecordStore};

pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    tracing::debug!("Opening database at {}", path_str);
    Database::new(path_str).context("Failed to open database")
}

/// Load config from `--config`, the user config file, or built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<FinhubConfig> {
    FinhubConfig::load(path).context("Failed to load configuration")
}

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The requested month, or the current one
pub fn resolve_period(month: Option<Period>) -> Period {
    month.unwrap_or_else(|| Period::containing(today()))
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let counts = db.record_counts()?;

    println!("✅ Database initialized successfully!");
    if counts.total() > 0 {
        println!("   Existing records kept: {}", counts.total());
    }
    println!();
    println!("Next steps:");
    println!("  1. Record income: finhub income add --amount 85000");
    println!("  2. Record spending: finhub expenses add -a 450 -c Food -d Lunch");
    println!("  3. See insights: finhub insights");

    Ok(())
}

pub fn cmd_delete(db: &Database, kind: EntityKind, id: i64) -> Result<()> {
    RecordStore::delete(db, kind, id)
        .with_context(|| format!("Failed to delete from {}", kind))?;
    println!("✅ Deleted {} record {}", kind, id);
    Ok(())
}
