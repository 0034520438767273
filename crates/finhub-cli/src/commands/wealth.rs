//! Investment, debt and EMI command implementations

use anyhow::{Context, Result};
use finhub_core::analytics::{debt_summary, emi_breakdown, investment_summary};
use finhub_core::models::{NewDebt, NewInvestment};
use finhub_core::{format_currency, Database, FinhubConfig};

pub fn cmd_investments_list(db: &Database, config: &FinhubConfig) -> Result<()> {
    let investments = db.list_investments()?;

    if investments.is_empty() {
        println!("No investments recorded.");
        return Ok(());
    }

    let summary = investment_summary(&investments);
    let money = |amount: f64| format_currency(amount, &config.currency.symbol);

    println!();
    println!("📈 Investments");
    println!("   ─────────────────────────────────────────────────────────────");

    for i in &investments {
        println!(
            "   [{}] {} │ {:<14} │ {:>12} → {:>12} │ {}",
            i.id,
            i.date,
            i.investment_type.as_str(),
            money(i.amount_invested),
            money(i.current_value),
            i.platform
        );
    }

    println!();
    println!("   By type");
    for t in &summary.by_type {
        println!(
            "     {:<14} {:>12} ({:+.2}%)",
            t.investment_type.as_str(),
            money(t.current_value),
            t.returns.percentage
        );
    }

    println!();
    println!("   Invested: {}", money(summary.total_invested));
    println!("   Current:  {}", money(summary.total_current));
    println!(
        "   Returns:  {} ({:+.2}%)",
        money(summary.returns.amount),
        summary.returns.percentage
    );

    Ok(())
}

pub fn cmd_investments_add(
    db: &Database,
    config: &FinhubConfig,
    investment: NewInvestment,
) -> Result<()> {
    let saved = db
        .insert_investment(&investment)
        .context("Failed to record investment")?;

    println!(
        "✅ Recorded investment {}: {} in {}",
        saved.id,
        format_currency(saved.amount_invested, &config.currency.symbol),
        saved.investment_type
    );

    Ok(())
}

pub fn cmd_debts_list(db: &Database, config: &FinhubConfig) -> Result<()> {
    let debts = db.list_debts()?;

    if debts.is_empty() {
        println!("No debts recorded. 🎉");
        return Ok(());
    }

    let threshold = config.rules.high_interest_threshold;
    let summary = debt_summary(&debts, threshold);
    let money = |amount: f64| format_currency(amount, &config.currency.symbol);

    println!();
    println!("🏦 Debts");
    println!("   ─────────────────────────────────────────────────────────────");

    for d in &debts {
        let flag = if d.interest_rate > threshold { " 🔥" } else { "" };
        println!(
            "   [{}] {:<14} │ {:<12} │ {:>5.2}%{} │ {:>12} │ EMI {} on day {}",
            d.id,
            d.debt_type.as_str(),
            d.lender,
            d.interest_rate,
            flag,
            money(d.outstanding_amount),
            money(d.monthly_emi),
            d.due_date
        );
    }

    println!();
    println!("   Outstanding:    {}", money(summary.total_outstanding));
    println!("   Monthly EMIs:   {}", money(summary.total_monthly_emi));
    println!("   Average rate:   {:.2}%", summary.average_interest_rate);
    if !summary.high_interest.is_empty() {
        println!();
        println!(
            "   🔥 {} debt(s) above {:.0}% interest. Consider paying these off first.",
            summary.high_interest.len(),
            threshold
        );
    }

    Ok(())
}

pub fn cmd_debts_add(db: &Database, config: &FinhubConfig, debt: NewDebt) -> Result<()> {
    let saved = db.insert_debt(&debt).context("Failed to record debt")?;

    println!(
        "✅ Recorded debt {}: {} {} at {:.2}%",
        saved.id,
        saved.lender,
        format_currency(saved.outstanding_amount, &config.currency.symbol),
        saved.interest_rate
    );

    Ok(())
}

pub fn cmd_emi(principal: f64, rate: f64, tenure: u32, config: &FinhubConfig) -> Result<()> {
    let breakdown = emi_breakdown(principal, rate, tenure)?;
    let money = |amount: f64| format_currency(amount, &config.currency.symbol);

    println!();
    println!("🧮 EMI Calculator");
    println!("   ─────────────────────────────");
    println!(
        "   {} at {:.2}% for {} months",
        money(principal),
        rate,
        tenure
    );
    println!();
    println!("   Monthly EMI:     {}", money(breakdown.emi));
    println!("   Total payment:   {}", money(breakdown.total_payment));
    println!("   Total interest:  {}", money(breakdown.total_interest));

    Ok(())
}
