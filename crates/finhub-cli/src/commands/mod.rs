//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init, delete and shared utilities (open_db, load_config)
//! - `cashflow` - Expense and income commands
//! - `budgets` - Budget list/add and monthly status
//! - `goals` - Savings goal commands
//! - `wealth` - Investments, debts and the EMI calculator
//! - `insights` - Insight generation
//! - `export` - CSV export, full backup and restore
//! - `serve` - Web server command
//! - `status` - Status/dashboard/reset commands

pub mod budgets;
pub mod cashflow;
pub mod core;
pub mod export;
pub mod goals;
pub mod insights;
pub mod serve;
pub mod status;
pub mod wealth;

// Re-export command functions for main.rs
pub use budgets::*;
pub use cashflow::*;
pub use core::*;
pub use export::*;
pub use goals::*;
pub use insights::*;
pub use serve::*;
pub use status::*;
pub use wealth::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
