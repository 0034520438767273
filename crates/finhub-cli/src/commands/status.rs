//! Status-related command implementations (status, dashboard, reset)

use std::path::Path;

use anyhow::Result;
use finhub_core::analytics::dashboard;
use finhub_core::{format_currency, Database, FinhubConfig, Period, Snapshot};

use super::{open_db, resolve_period};

pub fn cmd_status(db_path: &Path) -> Result<()> {
    use std::fs;

    println!();
    println!("📊 FinHub Status");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Database: {}", db_path.display());

    if !db_path.exists() {
        println!("   Size: (database not initialized)");
        println!();
        println!("   Run 'finhub init' to create it.");
        return Ok(());
    }

    if let Ok(metadata) = fs::metadata(db_path) {
        let size_kb = metadata.len() as f64 / 1024.0;
        if size_kb < 1024.0 {
            println!("   Size: {:.1} KB", size_kb);
        } else {
            println!("   Size: {:.1} MB", size_kb / 1024.0);
        }
    }

    match open_db(db_path).and_then(|db| Ok(db.record_counts()?)) {
        Ok(counts) => {
            println!();
            println!("   Expenses:     {}", counts.expenses);
            println!("   Income:       {}", counts.income);
            println!("   Budgets:      {}", counts.budgets);
            println!("   Goals:        {}", counts.goals);
            println!("   Investments:  {}", counts.investments);
            println!("   Debts:        {}", counts.debts);
        }
        Err(e) => {
            println!();
            println!("   ❌ Error opening database: {:#}", e);
        }
    }

    println!();
    Ok(())
}

pub fn cmd_dashboard(db: &Database, config: &FinhubConfig, month: Option<Period>) -> Result<()> {
    let period = resolve_period(month);
    let snapshot = Snapshot::fetch(db);
    let view = dashboard(&snapshot, period);
    let money = |amount: f64| format_currency(amount, &config.currency.symbol);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💰 FinHub Dashboard           │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Total Income:     {}", money(view.stats.total_income));
    println!("  Total Expenses:   {}", money(view.stats.total_expenses));
    println!("  Net Savings:      {}", money(view.stats.net_savings));
    println!("  Savings Rate:     {:.1}%", view.stats.savings_rate);
    println!();
    println!("  Investments:      {}", money(view.stats.total_investments));
    println!("  Debts:            {}", money(view.stats.total_debts));
    println!("  Net Worth:        {}", money(view.stats.net_worth));
    println!();
    println!("  📅 {}", period.label());
    println!("     Income:   {}", money(view.month_income));
    println!("     Expenses: {}", money(view.month_expenses));

    if !view.expenses_by_category.is_empty() {
        println!();
        println!("  Spending by category");
        for (category, amount) in view.expenses_by_category.iter() {
            println!("     {:<16} {:>14}", category.as_str(), money(amount));
        }
    }
    println!();

    if snapshot.is_empty() {
        println!("  No records yet. Start with 'finhub expenses add'.");
    } else {
        println!("  Run 'finhub insights' for personalised suggestions.");
    }

    Ok(())
}

/// Delete every record, keeping the schema
pub fn cmd_reset(db_path: &Path, yes: bool) -> Result<()> {
    use std::io::{self, Write};

    if !db_path.exists() {
        anyhow::bail!("Database not found: {}", db_path.display());
    }

    if !yes {
        print!("⚠️  This will delete all expenses, income, budgets, goals, investments and debts.\n\n");
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let db = open_db(db_path)?;
    let before = db.record_counts()?;
    db.clear_all()?;

    println!("✅ Database reset complete.");
    println!("   Deleted {} records", before.total());

    Ok(())
}
