//! List/create/delete handlers for the six record tables

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::parse_body;
use crate::{AppError, AppState, SuccessResponse};
use finhub_core::models::{
    Budget, Debt, EntityKind, Expense, ExpenseCategory, Income, Investment, NewBudget, NewDebt,
    NewExpense, NewIncome, NewInvestment, NewSavingsGoal, SavingsGoal,
};
use finhub_core::{ExpenseFilter, RecordStore};

fn delete_record(state: &AppState, kind: EntityKind, id: i64) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete(kind, id)?;
    info!(entity = %kind, id, "Deleted record");
    Ok(Json(SuccessResponse { success: true }))
}

// ========== Expenses ==========

/// Query parameters for listing expenses
#[derive(Debug, Deserialize)]
pub struct ExpenseQuery {
    /// Category filter (e.g. "Food")
    pub category: Option<String>,
    /// Case-insensitive match on description or category
    pub search: Option<String>,
}

/// GET /api/expenses - List expenses, newest first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpenseQuery>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let category = params
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(str::parse::<ExpenseCategory>)
        .transpose()
        .map_err(|e| AppError::bad_request(&e))?;

    let filter = ExpenseFilter::new()
        .category(category)
        .search(params.search.as_deref());

    Ok(Json(state.db.list_expenses_filtered(&filter)?))
}

/// POST /api/expenses - Record an expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<(StatusCode, Json<Expense>), AppError> {
    let new: NewExpense = parse_body(&body)?;
    let expense = state.db.insert_expense(&new)?;
    info!(id = expense.id, "Created expense");
    Ok((StatusCode::CREATED, Json(expense)))
}

/// DELETE /api/expenses/:id
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    delete_record(&state, EntityKind::Expenses, id)
}

// ========== Income ==========

/// GET /api/income - List income, newest first
pub async fn list_income(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Income>>, AppError> {
    Ok(Json(state.db.list_income()?))
}

/// POST /api/income - Record income
pub async fn create_income(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<(StatusCode, Json<Income>), AppError> {
    let new: NewIncome = parse_body(&body)?;
    let income = state.db.insert_income(&new)?;
    info!(id = income.id, "Created income");
    Ok((StatusCode::CREATED, Json(income)))
}

/// DELETE /api/income/:id
pub async fn delete_income(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    delete_record(&state, EntityKind::Income, id)
}

// ========== Budgets ==========

/// GET /api/budgets - List budgets by category
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Budget>>, AppError> {
    Ok(Json(state.db.list_budgets()?))
}

/// POST /api/budgets - Add a budget (409 if the category already has one)
pub async fn create_budget(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<(StatusCode, Json<Budget>), AppError> {
    let new: NewBudget = parse_body(&body)?;
    let budget = state.db.insert_budget(&new)?;
    info!(id = budget.id, category = %budget.category, "Created budget");
    Ok((StatusCode::CREATED, Json(budget)))
}

/// DELETE /api/budgets/:id
pub async fn delete_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    delete_record(&state, EntityKind::Budgets, id)
}

// ========== Savings Goals ==========

/// GET /api/goals - List goals by target date
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SavingsGoal>>, AppError> {
    Ok(Json(state.db.list_goals()?))
}

/// POST /api/goals - Add a savings goal
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<(StatusCode, Json<SavingsGoal>), AppError> {
    let new: NewSavingsGoal = parse_body(&body)?;
    let goal = state.db.insert_goal(&new)?;
    info!(id = goal.id, "Created savings goal");
    Ok((StatusCode::CREATED, Json(goal)))
}

/// DELETE /api/goals/:id
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    delete_record(&state, EntityKind::Goals, id)
}

// ========== Investments ==========

/// GET /api/investments - List investments, newest first
pub async fn list_investments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Investment>>, AppError> {
    Ok(Json(state.db.list_investments()?))
}

/// POST /api/investments - Record an investment
pub async fn create_investment(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<(StatusCode, Json<Investment>), AppError> {
    let new: NewInvestment = parse_body(&body)?;
    let investment = state.db.insert_investment(&new)?;
    info!(id = investment.id, "Created investment");
    Ok((StatusCode::CREATED, Json(investment)))
}

/// DELETE /api/investments/:id
pub async fn delete_investment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    delete_record(&state, EntityKind::Investments, id)
}

// ========== Debts ==========

/// GET /api/debts - List debts by due day
pub async fn list_debts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Debt>>, AppError> {
    Ok(Json(state.db.list_debts()?))
}

/// POST /api/debts - Record a debt
pub async fn create_debt(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<(StatusCode, Json<Debt>), AppError> {
    let new: NewDebt = parse_body(&body)?;
    let debt = state.db.insert_debt(&new)?;
    info!(id = debt.id, "Created debt");
    Ok((StatusCode::CREATED, Json(debt)))
}

/// DELETE /api/debts/:id
pub async fn delete_debt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    delete_record(&state, EntityKind::Debts, id)
}
