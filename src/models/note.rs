//! Note model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-form maintenance note, optionally attached to a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new note.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// Request body for partially updating a note.
///
/// A null field is treated the same as an absent one: the category reference
/// can be overwritten but never cleared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
}
