//! Record store seam and point-in-time snapshots
//!
//! Analytics and insights never talk to the database directly. They work on a
//! [`Snapshot`] fetched through [`RecordStore`], which degrades a failed fetch
//! to an empty collection.

use tracing::warn;

use crate::db::Database;
use crate::error::Result;
use crate::models::{
    Budget, Debt, EntityKind, Expense, Income, Investment, NewBudget, NewDebt, NewExpense,
    NewIncome, NewInvestment, NewSavingsGoal, SavingsGoal,
};

/// Per-entity list/insert/delete over the six record tables
pub trait RecordStore: Send + Sync {
    fn list_expenses(&self) -> Result<Vec<Expense>>;
    fn list_income(&self) -> Result<Vec<Income>>;
    fn list_budgets(&self) -> Result<Vec<Budget>>;
    fn list_goals(&self) -> Result<Vec<SavingsGoal>>;
    fn list_investments(&self) -> Result<Vec<Investment>>;
    fn list_debts(&self) -> Result<Vec<Debt>>;

    fn insert_expense(&self, expense: &NewExpense) -> Result<Expense>;
    fn insert_income(&self, income: &NewIncome) -> Result<Income>;
    fn insert_budget(&self, budget: &NewBudget) -> Result<Budget>;
    fn insert_goal(&self, goal: &NewSavingsGoal) -> Result<SavingsGoal>;
    fn insert_investment(&self, investment: &NewInvestment) -> Result<Investment>;
    fn insert_debt(&self, debt: &NewDebt) -> Result<Debt>;

    /// Delete one record; `Error::NotFound` if no such id
    fn delete(&self, kind: EntityKind, id: i64) -> Result<()>;
}

impl RecordStore for Database {
    fn list_expenses(&self) -> Result<Vec<Expense>> {
        Database::list_expenses(self)
    }

    fn list_income(&self) -> Result<Vec<Income>> {
        Database::list_income(self)
    }

    fn list_budgets(&self) -> Result<Vec<Budget>> {
        Database::list_budgets(self)
    }

    fn list_goals(&self) -> Result<Vec<SavingsGoal>> {
        Database::list_goals(self)
    }

    fn list_investments(&self) -> Result<Vec<Investment>> {
        Database::list_investments(self)
    }

    fn list_debts(&self) -> Result<Vec<Debt>> {
        Database::list_debts(self)
    }

    fn insert_expense(&self, expense: &NewExpense) -> Result<Expense> {
        Database::insert_expense(self, expense)
    }

    fn insert_income(&self, income: &NewIncome) -> Result<Income> {
        Database::insert_income(self, income)
    }

    fn insert_budget(&self, budget: &NewBudget) -> Result<Budget> {
        Database::insert_budget(self, budget)
    }

    fn insert_goal(&self, goal: &NewSavingsGoal) -> Result<SavingsGoal> {
        Database::insert_goal(self, goal)
    }

    fn insert_investment(&self, investment: &NewInvestment) -> Result<Investment> {
        Database::insert_investment(self, investment)
    }

    fn insert_debt(&self, debt: &NewDebt) -> Result<Debt> {
        Database::insert_debt(self, debt)
    }

    fn delete(&self, kind: EntityKind, id: i64) -> Result<()> {
        match kind {
            EntityKind::Expenses => self.delete_expense(id),
            EntityKind::Income => self.delete_income(id),
            EntityKind::Budgets => self.delete_budget(id),
            EntityKind::Goals => self.delete_goal(id),
            EntityKind::Investments => self.delete_investment(id),
            EntityKind::Debts => self.delete_debt(id),
        }
    }
}

/// Immutable copy of every record, taken once per computation pass
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub expenses: Vec<Expense>,
    pub income: Vec<Income>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingsGoal>,
    pub investments: Vec<Investment>,
    pub debts: Vec<Debt>,
}

impl Snapshot {
    /// Fetch all six collections; any that fails to load is empty
    pub fn fetch(store: &dyn RecordStore) -> Self {
        Self {
            expenses: or_empty(EntityKind::Expenses, store.list_expenses()),
            income: or_empty(EntityKind::Income, store.list_income()),
            budgets: or_empty(EntityKind::Budgets, store.list_budgets()),
            goals: or_empty(EntityKind::Goals, store.list_goals()),
            investments: or_empty(EntityKind::Investments, store.list_investments()),
            debts: or_empty(EntityKind::Debts, store.list_debts()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
            && self.income.is_empty()
            && self.budgets.is_empty()
            && self.goals.is_empty()
            && self.investments.is_empty()
            && self.debts.is_empty()
    }
}

fn or_empty<T>(kind: EntityKind, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!(entity = kind.as_str(), error = %e, "Fetch failed, treating as empty");
            Vec::new()
        }
    }
}
