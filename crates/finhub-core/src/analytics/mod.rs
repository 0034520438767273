//! Derived figures over a record snapshot
//!
//! - `aggregate` - totals, monthly subsets, category sums and ratios
//! - `emi` - loan installment calculation
//! - `dashboard`, `budget`, `goals`, `debts`, `investments` - per-view summaries

pub mod aggregate;
pub mod budget;
pub mod dashboard;
pub mod debts;
pub mod emi;
pub mod goals;
pub mod investments;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregate::{
    budget_utilization, filter_by_month, investment_returns, net_worth, percent_change,
    savings_rate, sum_by_category, total_of, CategoryTotals, Period, Returns,
};
pub use budget::{budget_report, spent_in_category, BudgetReport, BudgetState, BudgetStatus};
pub use dashboard::{dashboard, income_summary, Dashboard, FinancialStats, IncomeSummary};
pub use debts::{debt_summary, DebtSummary};
pub use emi::{emi, emi_breakdown, EmiBreakdown};
pub use goals::{goal_progress, goals_progress, GoalProgress};
pub use investments::{investment_summary, InvestmentSummary, TypeBreakdown};
