//! Expense and income command implementations

use anyhow::{Context, Result};
use finhub_core::analytics::{income_summary, total_of};
use finhub_core::models::{ExpenseCategory, NewExpense, NewIncome};
use finhub_core::{format_currency, Database, ExpenseFilter, FinhubConfig, Period};

use super::{today, truncate};

pub fn cmd_expenses_list(
    db: &Database,
    config: &FinhubConfig,
    category: Option<ExpenseCategory>,
    search: Option<&str>,
) -> Result<()> {
    let filter = ExpenseFilter::new().category(category).search(search);
    let expenses = db.list_expenses_filtered(&filter)?;

    if expenses.is_empty() {
        println!("No expenses found. Record one with:");
        println!("  finhub expenses add --amount 450 --category Food --description Lunch");
        return Ok(());
    }

    println!();
    println!("💸 Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    for e in &expenses {
        println!(
            "   [{}] {} │ {:>12} │ {:<14} │ {}",
            e.id,
            e.date,
            format_currency(e.amount, &config.currency.symbol),
            e.category.as_str(),
            truncate(&e.description, 30)
        );
    }

    println!();
    println!(
        "   {} expenses, total {}",
        expenses.len(),
        format_currency(total_of(&expenses, |e| e.amount), &config.currency.symbol)
    );

    Ok(())
}

pub fn cmd_expenses_add(db: &Database, config: &FinhubConfig, expense: NewExpense) -> Result<()> {
    let saved = db
        .insert_expense(&expense)
        .context("Failed to record expense")?;

    println!(
        "✅ Recorded expense {}: {} on {} ({})",
        saved.id,
        format_currency(saved.amount, &config.currency.symbol),
        saved.category,
        saved.date
    );

    Ok(())
}

pub fn cmd_income_list(db: &Database, config: &FinhubConfig) -> Result<()> {
    let income = db.list_income()?;

    if income.is_empty() {
        println!("No income recorded. Add some with:");
        println!("  finhub income add --amount 85000 --source Salary");
        return Ok(());
    }

    let summary = income_summary(&income, Period::containing(today()));
    let money = |amount: f64| format_currency(amount, &config.currency.symbol);

    println!();
    println!("💰 Income");
    println!("   ─────────────────────────────────────────────────────────────");

    for i in &income {
        println!(
            "   [{}] {} │ {:>12} │ {:<18} │ {}",
            i.id,
            i.date,
            money(i.amount),
            i.source.as_str(),
            i.income_type.as_str()
        );
    }

    println!();
    println!("   Total: {}", money(summary.total));
    println!("   This month: {}", money(summary.this_month));
    println!("   Sources: {}", summary.count);

    Ok(())
}

pub fn cmd_income_add(db: &Database, config: &FinhubConfig, income: NewIncome) -> Result<()> {
    let saved = db.insert_income(&income).context("Failed to record income")?;

    println!(
        "✅ Recorded income {}: {} from {} ({})",
        saved.id,
        format_currency(saved.amount, &config.currency.symbol),
        saved.source,
        saved.date
    );

    Ok(())
}
