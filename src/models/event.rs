//! Maintenance event model: one entry on the maintenance timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A maintenance event that happened on a given date, optionally with
/// cost and loose references to photos and receipt photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEvent {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    /// Photo ids are advisory references; they are never validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_photo_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// When the maintenance was performed (timeline position).
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new maintenance event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub photo_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub receipt_photo_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub date: DateTime<Utc>,
}

/// Request body for partially updating a maintenance event.
///
/// A null field is treated the same as an absent one: optional fields can be
/// overwritten but never cleared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub photo_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub receipt_photo_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}
