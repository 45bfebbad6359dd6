//! Category API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::AppState;

/// GET /api/categories - List all categories.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store.list_categories().await)
}

/// GET /api/categories/:id - Get a single category.
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    match state.store.get_category(id).await {
        Some(category) => Ok(Json(category)),
        None => Err(AppError::NotFound(format!("Category {} not found", id))),
    }
}

/// POST /api/categories - Create a new category.
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    // Validate required fields
    if request.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if request.color.trim().is_empty() {
        return Err(AppError::validation("Color is required"));
    }

    let category = state.store.create_category(request).await;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/:id - Partially update a category.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    match state.store.update_category(id, request).await {
        Some(category) => Ok(Json(category)),
        None => Err(AppError::NotFound(format!("Category {} not found", id))),
    }
}

/// DELETE /api/categories/:id - Delete a category.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_category(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Category {} not found", id)))
    }
}
