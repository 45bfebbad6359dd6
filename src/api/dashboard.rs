//! Dashboard API endpoints.

use axum::{extract::State, Json};

use crate::models::DashboardSummary;
use crate::AppState;

/// GET /api/dashboard/summary - Aggregate counts for the dashboard cards.
pub async fn dashboard_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.store.summary().await)
}
