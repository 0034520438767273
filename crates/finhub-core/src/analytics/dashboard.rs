//! Dashboard and income overviews

use serde::Serialize;

use super::aggregate::{
    filter_by_month, net_worth, savings_rate, sum_by_category, total_of, CategoryTotals, Period,
};
use crate::models::Income;
use crate::store::Snapshot;

/// Headline all-time figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialStats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_savings: f64,
    pub savings_rate: f64,
    /// Current value of all investments
    pub total_investments: f64,
    /// Outstanding balance of all debts
    pub total_debts: f64,
    pub net_worth: f64,
}

impl FinancialStats {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let total_income = total_of(&snapshot.income, |i| i.amount);
        let total_expenses = total_of(&snapshot.expenses, |e| e.amount);
        let total_investments = total_of(&snapshot.investments, |i| i.current_value);
        let total_debts = total_of(&snapshot.debts, |d| d.outstanding_amount);

        Self {
            total_income,
            total_expenses,
            net_savings: total_income - total_expenses,
            savings_rate: savings_rate(total_income, total_expenses),
            total_investments,
            total_debts,
            net_worth: net_worth(total_investments, total_debts),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub period: Period,
    pub stats: FinancialStats,
    /// All-time spending per category
    pub expenses_by_category: CategoryTotals,
    pub month_income: f64,
    pub month_expenses: f64,
}

pub fn dashboard(snapshot: &Snapshot, period: Period) -> Dashboard {
    let month_income = filter_by_month(&snapshot.income, |i| i.date, period);
    let month_expenses = filter_by_month(&snapshot.expenses, |e| e.date, period);

    Dashboard {
        period,
        stats: FinancialStats::from_snapshot(snapshot),
        expenses_by_category: sum_by_category(&snapshot.expenses),
        month_income: total_of(&month_income, |i| i.amount),
        month_expenses: total_of(&month_expenses, |e| e.amount),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeSummary {
    pub total: f64,
    pub this_month: f64,
    pub count: usize,
}

pub fn income_summary(income: &[Income], period: Period) -> IncomeSummary {
    let this_month = filter_by_month(income, |i| i.date, period);
    IncomeSummary {
        total: total_of(income, |i| i.amount),
        this_month: total_of(&this_month, |i| i.amount),
        count: income.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::*;
    use crate::models::{DebtType, ExpenseCategory, InvestmentType};

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let stats = FinancialStats::from_snapshot(&Snapshot::default());
        assert_eq!(stats.total_income, 0.0);
        assert_eq!(stats.savings_rate, 0.0);
        assert_eq!(stats.net_worth, 0.0);
    }

    #[test]
    fn test_dashboard_figures() {
        let snapshot = Snapshot {
            income: vec![
                income(date(2024, 2, 1), 100_000.0),
                income(date(2024, 3, 1), 100_000.0),
            ],
            expenses: vec![
                expense(date(2024, 2, 10), ExpenseCategory::Housing, 30_000.0, "Rent"),
                expense(date(2024, 3, 10), ExpenseCategory::Housing, 30_000.0, "Rent"),
                expense(date(2024, 3, 12), ExpenseCategory::Food, 10_000.0, "Groceries"),
            ],
            investments: vec![investment(InvestmentType::Stocks, 40_000.0, 50_000.0)],
            debts: vec![debt(DebtType::CarLoan, 9.0, 200_000.0, 8_000.0)],
            ..Default::default()
        };

        let view = dashboard(&snapshot, Period::new(2024, 3).unwrap());
        assert_eq!(view.stats.total_income, 200_000.0);
        assert_eq!(view.stats.total_expenses, 70_000.0);
        assert_eq!(view.stats.net_savings, 130_000.0);
        assert_eq!(view.stats.savings_rate, 65.0);
        assert_eq!(view.stats.total_investments, 50_000.0);
        assert_eq!(view.stats.net_worth, -150_000.0);
        assert_eq!(view.month_income, 100_000.0);
        assert_eq!(view.month_expenses, 40_000.0);
        assert_eq!(
            view.expenses_by_category.get(ExpenseCategory::Housing),
            Some(60_000.0)
        );
    }

    #[test]
    fn test_income_summary() {
        let records = vec![
            income(date(2024, 3, 1), 85_000.0),
            income(date(2024, 3, 20), 15_000.0),
            income(date(2024, 1, 1), 85_000.0),
        ];
        let summary = income_summary(&records, Period::new(2024, 3).unwrap());
        assert_eq!(summary.total, 185_000.0);
        assert_eq!(summary.this_month, 100_000.0);
        assert_eq!(summary.count, 3);
    }
}
