//! Office Tally Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Office tally entity: how many people ordered from a restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeTally {
    pub id: i64,
    pub restaurant: String,
    pub tally: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Create office tally payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeTallyCreate {
    pub restaurant: String,
    pub tally: i64,
}
