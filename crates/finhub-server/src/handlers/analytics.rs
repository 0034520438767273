//! Read-only analytics views

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use serde::Deserialize;

use super::MonthQuery;
use crate::{AppError, AppState};
use finhub_core::analytics::{
    budget_report, dashboard, debt_summary, emi_breakdown, goals_progress, investment_summary,
    BudgetReport, Dashboard, DebtSummary, EmiBreakdown, GoalProgress, InvestmentSummary,
};
use finhub_core::Snapshot;

/// GET /api/dashboard?month=YYYY-MM - Headline stats plus the month's totals
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let period = params.period()?;
    let snapshot = Snapshot::fetch(&state.db);
    Ok(Json(dashboard(&snapshot, period)))
}

/// GET /api/budgets/status?month=YYYY-MM - Spending against each budget
pub async fn get_budget_status(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<BudgetReport>, AppError> {
    let period = params.period()?;
    let snapshot = Snapshot::fetch(&state.db);
    Ok(Json(budget_report(
        &snapshot.budgets,
        &snapshot.expenses,
        period,
        state.config.rules.budget_warning_threshold,
    )))
}

/// GET /api/goals/progress - Progress toward each savings goal as of today
pub async fn get_goal_progress(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GoalProgress>>, AppError> {
    let goals = state.db.list_goals()?;
    Ok(Json(goals_progress(&goals, Local::now().date_naive())))
}

/// GET /api/debts/summary
pub async fn get_debt_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DebtSummary>, AppError> {
    let debts = state.db.list_debts()?;
    Ok(Json(debt_summary(
        &debts,
        state.config.rules.high_interest_threshold,
    )))
}

/// GET /api/investments/summary
pub async fn get_investment_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvestmentSummary>, AppError> {
    let investments = state.db.list_investments()?;
    Ok(Json(investment_summary(&investments)))
}

/// Query parameters for the EMI calculator
#[derive(Debug, Deserialize)]
pub struct EmiQuery {
    pub principal: f64,
    /// Annual rate in percent
    pub rate: f64,
    pub months: u32,
}

/// GET /api/emi?principal=&rate=&months= - Loan EMI with totals
pub async fn calculate_emi(Query(params): Query<EmiQuery>) -> Result<Json<EmiBreakdown>, AppError> {
    Ok(Json(emi_breakdown(
        params.principal,
        params.rate,
        params.months,
    )?))
}
