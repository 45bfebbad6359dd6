//! Photo model. Binary content lives on disk under the upload directory;
//! the entity only carries the relative file name and content type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A photo record referencing an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// File name relative to the upload directory, derived from the id.
    pub file_path: String,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Metadata accompanying a photo upload, assembled from multipart fields.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub title: String,
    pub description: Option<String>,
    /// Original client file name; only its extension is kept.
    pub original_name: String,
    pub content_type: String,
    pub category_id: Option<i64>,
}

/// Request body for partially updating photo metadata.
///
/// A null field is treated the same as an absent one: optional fields can be
/// overwritten but never cleared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhotoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
}
