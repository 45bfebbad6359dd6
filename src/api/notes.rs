//! Note API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{ListQuery, RecentQuery};
use crate::errors::AppError;
use crate::models::{CreateNoteRequest, Note, UpdateNoteRequest};
use crate::AppState;

/// GET /api/notes - List all notes, optionally filtered by category.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Note>> {
    let notes = match query.category_id {
        Some(category_id) => state.store.notes_by_category(category_id).await,
        None => state.store.list_notes().await,
    };
    Json(notes)
}

/// GET /api/notes/recent - Most recently created notes.
pub async fn recent_notes(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Json<Vec<Note>> {
    Json(state.store.recent_notes(query.limit).await)
}

/// GET /api/notes/:id - Get a single note.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Note>, AppError> {
    match state.store.get_note(id).await {
        Some(note) => Ok(Json(note)),
        None => Err(AppError::NotFound(format!("Note {} not found", id))),
    }
}

/// POST /api/notes - Create a new note.
pub async fn create_note(
    State(state): State<AppState>,
    Json(request): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if request.content.trim().is_empty() {
        return Err(AppError::validation("Content is required"));
    }

    let note = state.store.create_note(request).await;
    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/:id - Partially update a note.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, AppError> {
    match state.store.update_note(id, request).await {
        Some(note) => Ok(Json(note)),
        None => Err(AppError::NotFound(format!("Note {} not found", id))),
    }
}

/// DELETE /api/notes/:id - Delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_note(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Note {} not found", id)))
    }
}
