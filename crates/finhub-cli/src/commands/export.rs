//! Export, backup and restore command implementations

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use finhub_core::{Database, EntityKind, FullBackup};

use super::open_db;

/// Export one table to CSV, to a file or stdout
pub fn cmd_export_csv(db: &Database, kind: EntityKind, output: Option<&Path>) -> Result<()> {
    let csv = db.export_csv(kind)?;

    if csv.is_empty() {
        eprintln!("No {} to export.", kind);
        return Ok(());
    }

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(csv.as_bytes())?;

            let rows = csv.lines().count().saturating_sub(1);
            println!("✅ Exported {} {} rows to {}", rows, kind, path.display());
        }
        None => print!("{}", csv),
    }

    Ok(())
}

/// Export every table; with a directory each table goes to `<table>.csv`
pub fn cmd_export_all(db: &Database, output_dir: Option<&Path>) -> Result<()> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    for &kind in EntityKind::all() {
        match output_dir {
            Some(dir) => {
                let path = dir.join(format!("{}.csv", kind));
                cmd_export_csv(db, kind, Some(path.as_path()))?
            }
            None => {
                let csv = db.export_csv(kind)?;
                if csv.is_empty() {
                    tracing::debug!("Skipping empty table {}", kind);
                    continue;
                }
                println!("# {}", kind);
                println!("{}", csv);
            }
        }
    }

    Ok(())
}

/// Write a full database backup as JSON
pub fn cmd_backup(db: &Database, output: &Path) -> Result<()> {
    if output.exists() {
        anyhow::bail!(
            "Output file already exists: {}\nUse a different filename or remove the existing file.",
            output.display()
        );
    }

    println!("📦 Exporting full database backup...");

    let backup = db.export_full_backup()?;
    backup
        .save(output)
        .with_context(|| format!("Failed to write backup: {}", output.display()))?;

    println!("✅ Full backup exported to: {}", output.display());
    println!("   Version: {}", backup.metadata.version);
    println!("   Total records: {}", backup.metadata.total_records);
    println!();
    println!("   Expenses: {}", backup.expenses.len());
    println!("   Income: {}", backup.income.len());
    println!("   Budgets: {}", backup.budgets.len());
    println!("   Goals: {}", backup.goals.len());
    println!("   Investments: {}", backup.investments.len());
    println!("   Debts: {}", backup.debts.len());

    Ok(())
}

/// Restore a full JSON backup
pub fn cmd_restore(db_path: &Path, input: &Path, clear: bool, yes: bool) -> Result<()> {
    use std::io;

    if !input.exists() {
        anyhow::bail!("Backup file not found: {}", input.display());
    }

    let backup = FullBackup::load(input)
        .with_context(|| format!("Failed to read backup file: {}", input.display()))?;

    println!("📦 Backup from {}", backup.metadata.created_at);
    println!("   Version: {}", backup.metadata.version);
    println!("   Total records: {}", backup.metadata.total_records);

    if clear && !yes {
        print!("\n⚠️  --clear will delete all existing data first. Continue? [y/N] ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let db = open_db(db_path)?;
    let stats = db
        .import_full_backup(&backup, clear)
        .context("Failed to restore backup")?;

    println!();
    println!("✅ Restore complete: {} records", stats.total());
    println!("   Expenses: {}", stats.expenses);
    println!("   Income: {}", stats.income);
    println!("   Budgets: {}", stats.budgets);
    println!("   Goals: {}", stats.goals);
    println!("   Investments: {}", stats.investments);
    println!("   Debts: {}", stats.debts);

    Ok(())
}
