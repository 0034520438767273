//! FinHub Web Server
//!
//! Axum-based REST API for the FinHub personal finance tracker.
//!
//! - Per-table list/create/delete under `/api/<table>`
//! - Read-only analytics views (dashboard, budget status, goal progress,
//!   debt and investment summaries, EMI calculator)
//! - Insights for a month
//! - CSV export, full JSON backup and restore
//!
//! Every handler reads a fresh snapshot; nothing is cached between requests.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use finhub_core::{Database, FinhubConfig};

mod handlers;

/// Maximum accepted request body (backups included)
pub const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub config: FinhubConfig,
}

/// Generic success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(db: Database, config: FinhubConfig) -> Router {
    let state = Arc::new(AppState { db, config });

    let api_routes = Router::new()
        // Records
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route("/expenses/:id", delete(handlers::delete_expense))
        .route(
            "/income",
            get(handlers::list_income).post(handlers::create_income),
        )
        .route("/income/:id", delete(handlers::delete_income))
        .route(
            "/budgets",
            get(handlers::list_budgets).post(handlers::create_budget),
        )
        .route("/budgets/status", get(handlers::get_budget_status))
        .route("/budgets/:id", delete(handlers::delete_budget))
        .route(
            "/goals",
            get(handlers::list_goals).post(handlers::create_goal),
        )
        .route("/goals/progress", get(handlers::get_goal_progress))
        .route("/goals/:id", delete(handlers::delete_goal))
        .route(
            "/investments",
            get(handlers::list_investments).post(handlers::create_investment),
        )
        .route(
            "/investments/summary",
            get(handlers::get_investment_summary),
        )
        .route("/investments/:id", delete(handlers::delete_investment))
        .route(
            "/debts",
            get(handlers::list_debts).post(handlers::create_debt),
        )
        .route("/debts/summary", get(handlers::get_debt_summary))
        .route("/debts/:id", delete(handlers::delete_debt))
        // Analytics
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/emi", get(handlers::calculate_emi))
        // Insights
        .route("/insights", get(handlers::get_insights))
        // Export / backup
        .route("/export/full", get(handlers::export_full))
        .route("/export/:entity", get(handlers::export_csv))
        .route("/import/full", post(handlers::import_full));

    // Restrictive default: same-origin only
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors 'none'",
    );

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ))
}

/// Start the server
pub async fn serve(db: Database, config: FinhubConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let counts = db.record_counts()?;
    info!(records = counts.total(), db = db.path(), "Opened database");

    let app = create_router(db, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn conflict(msg: &str) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();

        // Client-caused core errors keep their message
        match err.downcast_ref::<finhub_core::Error>() {
            Some(finhub_core::Error::NotFound(msg)) => return Self::not_found(msg),
            Some(finhub_core::Error::InvalidData(msg)) => return Self::bad_request(msg),
            Some(finhub_core::Error::Conflict(msg)) => return Self::conflict(msg),
            _ => {}
        }

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
