//! Budget command implementations

use anyhow::{Context, Result};
use finhub_core::analytics::{budget_report, BudgetState};
use finhub_core::models::NewBudget;
use finhub_core::{format_currency, Database, FinhubConfig, Period, Snapshot};

use super::resolve_period;

pub fn cmd_budgets_list(db: &Database, config: &FinhubConfig) -> Result<()> {
    let budgets = db.list_budgets()?;

    if budgets.is_empty() {
        println!("No budgets set. Add one with:");
        println!("  finhub budgets add --category Food --limit 10000");
        return Ok(());
    }

    println!();
    println!("📋 Budgets");
    println!("   ─────────────────────────────────────────────────────────────");

    for b in &budgets {
        let rollover = if b.rollover_enabled { " (rollover)" } else { "" };
        println!(
            "   [{}] {:<16} {:>12}/month{}",
            b.id,
            b.category.as_str(),
            format_currency(b.monthly_limit, &config.currency.symbol),
            rollover
        );
    }

    Ok(())
}

pub fn cmd_budgets_add(db: &Database, config: &FinhubConfig, budget: NewBudget) -> Result<()> {
    let saved = db.insert_budget(&budget).context("Failed to add budget")?;

    println!(
        "✅ Added {} budget of {}/month",
        saved.category,
        format_currency(saved.monthly_limit, &config.currency.symbol)
    );

    Ok(())
}

pub fn cmd_budgets_status(db: &Database, config: &FinhubConfig, month: Option<Period>) -> Result<()> {
    let period = resolve_period(month);
    let snapshot = Snapshot::fetch(db);

    if snapshot.budgets.is_empty() {
        println!("No budgets set.");
        return Ok(());
    }

    let report = budget_report(
        &snapshot.budgets,
        &snapshot.expenses,
        period,
        config.rules.budget_warning_threshold,
    );
    let money = |amount: f64| format_currency(amount, &config.currency.symbol);

    println!();
    println!("📋 Budget Status: {}", period.label());
    println!("   ─────────────────────────────────────────────────────────────");

    for item in &report.items {
        let icon = match item.state {
            BudgetState::OnTrack => "✅",
            BudgetState::Warning => "⚠️ ",
            BudgetState::OverBudget => "🚨",
        };
        println!(
            "   {} {:<16} {:>12} / {:<12} {:>5.1}%",
            icon,
            item.budget.category.as_str(),
            money(item.spent),
            money(item.budget.monthly_limit),
            item.utilization
        );
    }

    println!();
    println!(
        "   Total: {} of {}",
        money(report.total_spent),
        money(report.total_budget)
    );

    Ok(())
}
