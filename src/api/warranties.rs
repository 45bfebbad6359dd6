//! Warranty API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{ListQuery, UpcomingQuery};
use crate::errors::AppError;
use crate::models::{CreateWarrantyRequest, UpdateWarrantyRequest, Warranty};
use crate::AppState;

/// GET /api/warranties - List all warranties, optionally filtered by category.
pub async fn list_warranties(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Warranty>> {
    let warranties = match query.category_id {
        Some(category_id) => state.store.warranties_by_category(category_id).await,
        None => state.store.list_warranties().await,
    };
    Json(warranties)
}

/// GET /api/warranties/upcoming - Warranties expiring within the window.
pub async fn upcoming_warranties(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> Json<Vec<Warranty>> {
    Json(state.store.upcoming_warranties(query.days).await)
}

/// GET /api/warranties/:id - Get a single warranty.
pub async fn get_warranty(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Warranty>, AppError> {
    match state.store.get_warranty(id).await {
        Some(warranty) => Ok(Json(warranty)),
        None => Err(AppError::NotFound(format!("Warranty {} not found", id))),
    }
}

/// POST /api/warranties - Create a new warranty.
pub async fn create_warranty(
    State(state): State<AppState>,
    Json(request): Json<CreateWarrantyRequest>,
) -> Result<(StatusCode, Json<Warranty>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }

    let warranty = state.store.create_warranty(request).await;
    Ok((StatusCode::CREATED, Json(warranty)))
}

/// PUT /api/warranties/:id - Partially update a warranty.
pub async fn update_warranty(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateWarrantyRequest>,
) -> Result<Json<Warranty>, AppError> {
    match state.store.update_warranty(id, request).await {
        Some(warranty) => Ok(Json(warranty)),
        None => Err(AppError::NotFound(format!("Warranty {} not found", id))),
    }
}

/// DELETE /api/warranties/:id - Delete a warranty.
pub async fn delete_warranty(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_warranty(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Warranty {} not found", id)))
    }
}
