//! Full-data export endpoint.

use axum::{extract::State, Json};

use crate::models::ExportData;
use crate::AppState;

/// GET /api/export - Snapshot of every collection as a single JSON document.
pub async fn export_data(State(state): State<AppState>) -> Json<ExportData> {
    Json(state.store.export().await)
}
