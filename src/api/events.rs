//! Maintenance event API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{ListQuery, RecentQuery};
use crate::errors::AppError;
use crate::models::{CreateEventRequest, MaintenanceEvent, UpdateEventRequest};
use crate::AppState;

/// GET /api/maintenance-events - List all events, optionally filtered by category.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<MaintenanceEvent>> {
    let events = match query.category_id {
        Some(category_id) => state.store.events_by_category(category_id).await,
        None => state.store.list_events().await,
    };
    Json(events)
}

/// GET /api/maintenance-events/recent - Most recent events by event date.
pub async fn recent_events(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Json<Vec<MaintenanceEvent>> {
    Json(state.store.recent_events(query.limit).await)
}

/// GET /api/maintenance-events/:id - Get a single event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MaintenanceEvent>, AppError> {
    match state.store.get_event(id).await {
        Some(event) => Ok(Json(event)),
        None => Err(AppError::NotFound(format!(
            "Maintenance event {} not found",
            id
        ))),
    }
}

/// POST /api/maintenance-events - Create a new event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<MaintenanceEvent>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::validation("Description is required"));
    }

    let event = state.store.create_event(request).await;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/maintenance-events/:id - Partially update an event.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<MaintenanceEvent>, AppError> {
    match state.store.update_event(id, request).await {
        Some(event) => Ok(Json(event)),
        None => Err(AppError::NotFound(format!(
            "Maintenance event {} not found",
            id
        ))),
    }
}

/// DELETE /api/maintenance-events/:id - Delete an event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_event(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Maintenance event {} not found",
            id
        )))
    }
}
