//! Budget status for a month

use std::fmt;

use serde::Serialize;

use super::aggregate::{budget_utilization, filter_by_month, total_of, Period};
use crate::models::{Budget, Expense};

/// Where a budget stands against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetState {
    OnTrack,
    /// Above the warning threshold but not over the limit
    Warning,
    OverBudget,
}

impl BudgetState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTrack => "on_track",
            Self::Warning => "warning",
            Self::OverBudget => "over_budget",
        }
    }

    /// Classify a utilization percentage
    pub fn classify(utilization: f64, warning_threshold: f64) -> Self {
        if utilization > 100.0 {
            Self::OverBudget
        } else if utilization > warning_threshold {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub spent: f64,
    /// Negative when over the limit
    pub remaining: f64,
    pub utilization: f64,
    pub state: BudgetState,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub period: Period,
    pub items: Vec<BudgetStatus>,
    pub total_budget: f64,
    pub total_spent: f64,
}

/// Spending in `period` for the budget's category
pub fn spent_in_category(budget: &Budget, expenses: &[Expense], period: Period) -> f64 {
    let in_month = filter_by_month(expenses, |e| e.date, period);
    in_month
        .iter()
        .filter(|e| e.category == budget.category)
        .map(|e| e.amount)
        .sum()
}

pub fn budget_report(
    budgets: &[Budget],
    expenses: &[Expense],
    period: Period,
    warning_threshold: f64,
) -> BudgetReport {
    let items: Vec<BudgetStatus> = budgets
        .iter()
        .map(|budget| {
            let spent = spent_in_category(budget, expenses, period);
            let utilization = budget_utilization(spent, budget.monthly_limit);
            BudgetStatus {
                budget: budget.clone(),
                spent,
                remaining: budget.monthly_limit - spent,
                utilization,
                state: BudgetState::classify(utilization, warning_threshold),
            }
        })
        .collect();

    BudgetReport {
        period,
        total_budget: total_of(budgets, |b| b.monthly_limit),
        total_spent: total_of(&items, |i| i.spent),
        items,
    }
}
