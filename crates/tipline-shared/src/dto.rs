//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create or update a tip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipRequest {
    pub title: String,
    pub content: String,
}

/// A tip as returned to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
}

/// One page of the canonical sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipPageResponse {
    pub items: Vec<TipResponse>,
    pub page: usize,
    pub page_size: usize,
    /// Zero when there are no tips at all.
    pub page_count: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Today's tip and the current random tip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub today: Option<TipResponse>,
    pub random: Option<TipResponse>,
}

/// Result of passing the admin gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessResponse {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub capabilities: Vec<String>,
}

/// Query parameters for page requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

/// Query parameters for deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}
