//! Export and full backup/import handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, Response, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::parse_body;
use crate::{AppError, AppState};
use finhub_core::models::{EntityKind, RecordCounts};
use finhub_core::FullBackup;

/// GET /api/export/:entity - Export one table as CSV
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    Path(entity): Path<String>,
) -> Result<Response<Body>, AppError> {
    let kind: EntityKind = entity.parse().map_err(|e: String| AppError::bad_request(&e))?;

    let csv = state.db.export_csv(kind)?;
    let rows = csv.lines().count().saturating_sub(1);
    info!(entity = %kind, rows, "Exported CSV");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.csv\"", kind),
        )
        .body(Body::from(csv))
        .map_err(|e| AppError::internal(&e.to_string()))
}

/// GET /api/export/full - Export full database backup as JSON
pub async fn export_full(State(state): State<Arc<AppState>>) -> Result<Response<Body>, AppError> {
    let backup = state.db.export_full_backup()?;
    let json =
        serde_json::to_string_pretty(&backup).map_err(|e| AppError::internal(&e.to_string()))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"finhub-backup-{}.json\"",
                chrono::Utc::now().format("%Y-%m-%d")
            ),
        )
        .body(Body::from(json))
        .map_err(|e| AppError::internal(&e.to_string()))
}

/// Query parameters for full import
#[derive(Debug, Deserialize)]
pub struct ImportFullQuery {
    /// Clear existing data first; without it the database must be empty
    #[serde(default)]
    pub clear: bool,
}

/// Response for full import
#[derive(Serialize)]
pub struct ImportFullResponse {
    pub success: bool,
    pub stats: RecordCounts,
}

/// POST /api/import/full - Restore a full JSON backup
pub async fn import_full(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ImportFullQuery>,
    body: String,
) -> Result<Json<ImportFullResponse>, AppError> {
    let backup: FullBackup = parse_body(&body)?;

    info!(
        version = %backup.metadata.version,
        records = backup.metadata.total_records,
        clear = params.clear,
        "Importing full backup"
    );

    let stats = state.db.import_full_backup(&backup, params.clear)?;

    Ok(Json(ImportFullResponse {
        success: true,
        stats,
    }))
}
