//! FinHub CLI - Personal finance tracker
//!
//! Usage:
//!   finhub init                         Initialize database
//!   finhub expenses add -a 450 -c Food -d Lunch
//!   finhub insights --month 2024-03     Generate insights
//!   finhub serve --port 3000            Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use finhub_core::models::{
    EntityKind, NewBudget, NewDebt, NewExpense, NewIncome, NewInvestment, NewSavingsGoal,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Dashboard { month } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_dashboard(&db, &config, month)
        }
        Commands::Insights { month, json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_insights(&db, &config, month, json)
        }
        Commands::Expenses { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_expenses_list(&db, &config, None, None),
                Some(ExpensesAction::List { category, search }) => {
                    commands::cmd_expenses_list(&db, &config, category, search.as_deref())
                }
                Some(ExpensesAction::Add {
                    amount,
                    category,
                    description,
                    date,
                    payment_method,
                    notes,
                }) => commands::cmd_expenses_add(
                    &db,
                    &config,
                    NewExpense {
                        date: date.unwrap_or_else(commands::today),
                        category,
                        amount,
                        payment_method,
                        description,
                        notes,
                    },
                ),
                Some(ExpensesAction::Delete { id }) => {
                    commands::cmd_delete(&db, EntityKind::Expenses, id)
                }
            }
        }
        Commands::Income { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(IncomeAction::List) => commands::cmd_income_list(&db, &config),
                Some(IncomeAction::Add {
                    amount,
                    source,
                    income_type,
                    date,
                    notes,
                }) => commands::cmd_income_add(
                    &db,
                    &config,
                    NewIncome {
                        date: date.unwrap_or_else(commands::today),
                        amount,
                        source,
                        income_type,
                        notes,
                    },
                ),
                Some(IncomeAction::Delete { id }) => {
                    commands::cmd_delete(&db, EntityKind::Income, id)
                }
            }
        }
        Commands::Budgets { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(BudgetsAction::List) => commands::cmd_budgets_list(&db, &config),
                Some(BudgetsAction::Add {
                    category,
                    limit,
                    rollover,
                    notes,
                }) => commands::cmd_budgets_add(
                    &db,
                    &config,
                    NewBudget {
                        category,
                        monthly_limit: limit,
                        rollover_enabled: rollover,
                        notes,
                    },
                ),
                Some(BudgetsAction::Delete { id }) => {
                    commands::cmd_delete(&db, EntityKind::Budgets, id)
                }
                Some(BudgetsAction::Status { month }) => {
                    commands::cmd_budgets_status(&db, &config, month)
                }
            }
        }
        Commands::Goals { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(GoalsAction::List) => commands::cmd_goals_list(&db, &config),
                Some(GoalsAction::Add {
                    name,
                    target,
                    current,
                    monthly,
                    by,
                }) => commands::cmd_goals_add(
                    &db,
                    &config,
                    NewSavingsGoal {
                        name,
                        target_amount: target,
                        current_amount: current,
                        monthly_contribution: monthly,
                        target_date: by,
                    },
                ),
                Some(GoalsAction::Delete { id }) => commands::cmd_delete(&db, EntityKind::Goals, id),
            }
        }
        Commands::Investments { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(InvestmentsAction::List) => {
                    commands::cmd_investments_list(&db, &config)
                }
                Some(InvestmentsAction::Add {
                    investment_type,
                    invested,
                    current,
                    platform,
                    date,
                    notes,
                }) => commands::cmd_investments_add(
                    &db,
                    &config,
                    NewInvestment {
                        date: date.unwrap_or_else(commands::today),
                        investment_type,
                        amount_invested: invested,
                        current_value: current.unwrap_or(invested),
                        platform,
                        notes,
                    },
                ),
                Some(InvestmentsAction::Delete { id }) => {
                    commands::cmd_delete(&db, EntityKind::Investments, id)
                }
            }
        }
        Commands::Debts { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(DebtsAction::List) => commands::cmd_debts_list(&db, &config),
                Some(DebtsAction::Add {
                    debt_type,
                    lender,
                    rate,
                    outstanding,
                    emi,
                    due_day,
                }) => commands::cmd_debts_add(
                    &db,
                    &config,
                    NewDebt {
                        debt_type,
                        lender,
                        interest_rate: rate,
                        outstanding_amount: outstanding,
                        monthly_emi: emi,
                        due_date: due_day,
                    },
                ),
                Some(DebtsAction::Delete { id }) => commands::cmd_delete(&db, EntityKind::Debts, id),
            }
        }
        Commands::Emi {
            principal,
            rate,
            months,
        } => commands::cmd_emi(principal, rate, months, &config),
        Commands::Export { entity, output } => {
            let db = commands::open_db(&cli.db)?;
            match entity {
                ExportTarget::All => commands::cmd_export_all(&db, output.as_deref()),
                ExportTarget::One(kind) => commands::cmd_export_csv(&db, kind, output.as_deref()),
            }
        }
        Commands::Backup { output } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_backup(&db, &output)
        }
        Commands::Restore { input, clear, yes } => {
            commands::cmd_restore(&cli.db, &input, clear, yes)
        }
        Commands::Reset { yes } => commands::cmd_reset(&cli.db, yes),
        Commands::Serve { port, host } => commands::cmd_serve(&cli.db, config, &host, port).await,
    }
}
