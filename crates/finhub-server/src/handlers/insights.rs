//! Insight handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use super::MonthQuery;
use crate::{AppError, AppState};
use finhub_core::{Finding, InsightEngine};

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    /// Analyzed month, `YYYY-MM`
    pub month: String,
    pub count: usize,
    pub insights: Vec<Finding>,
}

/// GET /api/insights?month=YYYY-MM - Run every insight rule for a month
///
/// A fresh snapshot is analyzed on every call. Record reads that fail are
/// treated as empty, so this only errors on a bad `month`.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<InsightsResponse>, AppError> {
    let period = params.period()?;
    let insights = InsightEngine::new().run(&state.db, period, &state.config);

    Ok(Json(InsightsResponse {
        month: period.to_string(),
        count: insights.len(),
        insights,
    }))
}
