//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.
//! Handlers are thin: validate the payload, call the store, map missing
//! entities to 404.

mod categories;
mod dashboard;
mod events;
mod export;
mod notes;
mod photos;
mod warranties;

pub use categories::*;
pub use dashboard::*;
pub use events::*;
pub use export::*;
pub use notes::*;
pub use photos::*;
pub use warranties::*;

use serde::Deserialize;

/// Query parameters for list endpoints with an optional category filter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// Query parameters for recency-limited list endpoints.
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    #[serde(default = "default_recent_limit")]
    pub limit: usize,
}

fn default_recent_limit() -> usize {
    3
}

/// Query parameters for the upcoming-warranty window.
#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    #[serde(default = "default_upcoming_days")]
    pub days: i64,
}

fn default_upcoming_days() -> i64 {
    30
}
