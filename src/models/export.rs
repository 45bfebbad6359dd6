//! Aggregate views: the full-data export document and the dashboard summary.

use serde::{Deserialize, Serialize};

use super::{Category, MaintenanceEvent, Note, Photo, Warranty};

/// Snapshot of every collection, returned by the export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub categories: Vec<Category>,
    pub photos: Vec<Photo>,
    pub notes: Vec<Note>,
    pub warranties: Vec<Warranty>,
    pub maintenance_events: Vec<MaintenanceEvent>,
}

/// Per-collection counts for the dashboard status cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub categories: usize,
    pub photos: usize,
    pub notes: usize,
    pub warranties: usize,
    pub maintenance_events: usize,
    /// Warranties expiring within the next 30 days.
    pub upcoming_warranties: usize,
}
