//! Photo API endpoints, including multipart upload and binary download.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::{ListQuery, RecentQuery};
use crate::errors::AppError;
use crate::models::{Photo, PhotoUpload, UpdatePhotoRequest};
use crate::AppState;

/// GET /api/photos - List all photos, optionally filtered by category.
pub async fn list_photos(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Photo>> {
    let photos = match query.category_id {
        Some(category_id) => state.store.photos_by_category(category_id).await,
        None => state.store.list_photos().await,
    };
    Json(photos)
}

/// GET /api/photos/recent - Most recently uploaded photos.
pub async fn recent_photos(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Json<Vec<Photo>> {
    Json(state.store.recent_photos(query.limit).await)
}

/// GET /api/photos/:id - Get a single photo's metadata.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Photo>, AppError> {
    match state.store.get_photo(id).await {
        Some(photo) => Ok(Json(photo)),
        None => Err(AppError::NotFound(format!("Photo {} not found", id))),
    }
}

/// GET /api/photos/:id/file - Fetch a photo's binary content.
pub async fn get_photo_file(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.store.photo_file(id).await {
        Some((bytes, content_type)) => {
            Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
        }
        None => Err(AppError::NotFound(format!("Photo file {} not found", id))),
    }
}

/// POST /api/photos - Upload a photo as multipart form data.
///
/// Expects a `file` binary field plus `title`, `description` and `categoryId`
/// text fields. Oversized bodies are rejected by the body-limit layer before
/// the upload reaches the store.
pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Photo>), AppError> {
    let mut title = String::new();
    let mut description: Option<String> = None;
    let mut category_id: Option<i64> = None;
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => {
                title = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid title field: {}", e)))?;
            }
            "description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Invalid description field: {}", e))
                })?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            "categoryId" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Invalid categoryId field: {}", e))
                })?;
                if !text.is_empty() {
                    category_id = Some(
                        text.parse()
                            .map_err(|_| AppError::validation("categoryId must be a number"))?,
                    );
                }
            }
            "file" => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid file field: {}", e)))?;
                file = Some((original_name, content_type, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (original_name, content_type, bytes) =
        file.ok_or_else(|| AppError::validation("No file uploaded"))?;
    if title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }

    let upload = PhotoUpload {
        title,
        description,
        original_name,
        content_type,
        category_id,
    };
    let photo = state.store.create_photo(upload, &bytes).await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

/// PUT /api/photos/:id - Partially update photo metadata.
pub async fn update_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePhotoRequest>,
) -> Result<Json<Photo>, AppError> {
    match state.store.update_photo(id, request).await {
        Some(photo) => Ok(Json(photo)),
        None => Err(AppError::NotFound(format!("Photo {} not found", id))),
    }
}

/// DELETE /api/photos/:id - Delete a photo and its backing file.
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_photo(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Photo {} not found", id)))
    }
}
