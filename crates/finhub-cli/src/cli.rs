//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use finhub_core::models::{
    DebtType, EntityKind, ExpenseCategory, IncomeSource, IncomeType, InvestmentType,
    PaymentMethod,
};
use finhub_core::Period;

/// FinHub - Track spending, budgets, goals and net worth
#[derive(Parser)]
#[command(name = "finhub")]
#[command(about = "Personal finance tracker with rule-based insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, env = "FINHUB_DB", default_value = "finhub.db", global = true)]
    pub db: PathBuf,

    /// Config file (overrides the user config location)
    #[arg(long, env = "FINHUB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Show database status (path, size, record counts)
    Status,

    /// Show the financial dashboard
    Dashboard {
        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<Period>,
    },

    /// Generate insights for a month
    Insights {
        /// Month to analyze (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<Period>,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage expenses (list, add, delete)
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },

    /// Manage income (list, add, delete)
    Income {
        #[command(subcommand)]
        action: Option<IncomeAction>,
    },

    /// Manage monthly budgets (list, add, delete, status)
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },

    /// Manage savings goals (list, add, delete)
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Manage investments (list, add, delete)
    Investments {
        #[command(subcommand)]
        action: Option<InvestmentsAction>,
    },

    /// Manage debts (list, add, delete)
    Debts {
        #[command(subcommand)]
        action: Option<DebtsAction>,
    },

    /// Calculate a loan EMI
    Emi {
        /// Loan principal
        #[arg(short, long)]
        principal: f64,

        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: f64,

        /// Tenure in months
        #[arg(short, long)]
        months: u32,
    },

    /// Export records to CSV
    Export {
        /// Table to export (expenses, income, budgets, goals, investments, debts) or "all"
        #[arg(short, long, default_value = "all")]
        entity: ExportTarget,

        /// Output file, or directory when exporting all (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a full JSON backup of every table
    Backup {
        /// Output file (must not exist)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Restore a full JSON backup
    Restore {
        /// JSON backup file to restore
        #[arg(short, long)]
        input: PathBuf,

        /// Clear all existing data before restoring
        #[arg(long)]
        clear: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete every record (the schema is kept)
    Reset {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List expenses (newest first)
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<ExpenseCategory>,

        /// Case-insensitive match on description or category
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Record an expense
    Add {
        /// Amount spent
        #[arg(short, long)]
        amount: f64,

        /// Category (e.g. Food, Housing)
        #[arg(short, long)]
        category: ExpenseCategory,

        /// What it was for
        #[arg(short, long)]
        description: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Payment method (Cash, UPI, Credit Card, Debit Card, Net Banking)
        #[arg(short, long, default_value = "UPI")]
        payment_method: PaymentMethod,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete an expense by ID
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum IncomeAction {
    /// List income (newest first)
    List,

    /// Record income
    Add {
        #[arg(short, long)]
        amount: f64,

        /// Source (Salary, Freelance, Business, Investment Returns, Gift, Other)
        #[arg(short, long, default_value = "Salary")]
        source: IncomeSource,

        /// Regular, Bonus or One-time
        #[arg(short = 't', long = "type", default_value = "Regular")]
        income_type: IncomeType,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete an income record by ID
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// List budgets
    List,

    /// Add a monthly budget for a category
    Add {
        #[arg(short, long)]
        category: ExpenseCategory,

        /// Monthly limit
        #[arg(short, long)]
        limit: f64,

        /// Carry unused budget into the next month
        #[arg(long)]
        rollover: bool,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a budget by ID
    Delete { id: i64 },

    /// Spending against each budget for a month
    Status {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<Period>,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List goals with progress
    List,

    /// Add a savings goal
    Add {
        #[arg(short, long)]
        name: String,

        /// Target amount
        #[arg(short, long)]
        target: f64,

        /// Amount saved so far
        #[arg(short, long, default_value = "0")]
        current: f64,

        /// Planned monthly contribution
        #[arg(short, long, default_value = "0")]
        monthly: f64,

        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        by: NaiveDate,
    },

    /// Delete a goal by ID
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum InvestmentsAction {
    /// List investments with a portfolio summary
    List,

    /// Record an investment
    Add {
        /// Mutual Fund, Stocks, Index Fund, Fixed Deposit, PPF, NPS, Crypto, Gold, Real Estate
        #[arg(short = 't', long = "type")]
        investment_type: InvestmentType,

        /// Amount invested
        #[arg(short, long)]
        invested: f64,

        /// Current value (defaults to the amount invested)
        #[arg(short, long)]
        current: Option<f64>,

        #[arg(short, long, default_value = "")]
        platform: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete an investment by ID
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum DebtsAction {
    /// List debts with a summary
    List,

    /// Record a debt
    Add {
        /// Credit Card, Personal Loan, Home Loan, Car Loan, Education Loan, Other
        #[arg(short = 't', long = "type")]
        debt_type: DebtType,

        #[arg(short, long)]
        lender: String,

        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: f64,

        /// Outstanding balance
        #[arg(short, long)]
        outstanding: f64,

        /// Monthly EMI
        #[arg(short, long, default_value = "0")]
        emi: f64,

        /// Day of the month the EMI is due (1-31)
        #[arg(short, long)]
        due_day: u8,
    },

    /// Delete a debt by ID
    Delete { id: i64 },
}

/// What `finhub export` writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    All,
    One(EntityKind),
}

impl std::str::FromStr for ExportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::One)
        }
    }
}
