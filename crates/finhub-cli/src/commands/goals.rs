//! Savings goal command implementations

use anyhow::{Context, Result};
use finhub_core::analytics::goals_progress;
use finhub_core::models::NewSavingsGoal;
use finhub_core::{format_currency, Database, FinhubConfig};

use super::today;

pub fn cmd_goals_list(db: &Database, config: &FinhubConfig) -> Result<()> {
    let goals = db.list_goals()?;

    if goals.is_empty() {
        println!("No savings goals. Add one with:");
        println!("  finhub goals add --name \"Emergency Fund\" --target 300000 --by 2026-12-31");
        return Ok(());
    }

    let money = |amount: f64| format_currency(amount, &config.currency.symbol);

    println!();
    println!("🎯 Savings Goals");
    println!("   ─────────────────────────────────────────────────────────────");

    for p in goals_progress(&goals, today()) {
        let status = if p.on_track { "on track" } else { "behind" };
        println!(
            "   [{}] {} ({:.1}%, {})",
            p.goal.id, p.goal.name, p.progress, status
        );
        println!(
            "       {} of {} by {} │ {} months left, need {}/month",
            money(p.goal.current_amount),
            money(p.goal.target_amount),
            p.goal.target_date,
            p.months_left,
            money(p.required_monthly)
        );
    }

    Ok(())
}

pub fn cmd_goals_add(db: &Database, config: &FinhubConfig, goal: NewSavingsGoal) -> Result<()> {
    let saved = db.insert_goal(&goal).context("Failed to add goal")?;

    println!(
        "✅ Added goal {}: {} ({} by {})",
        saved.id,
        saved.name,
        format_currency(saved.target_amount, &config.currency.symbol),
        saved.target_date
    );

    Ok(())
}
