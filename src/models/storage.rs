use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageStats {
    pub entries_count: i64,
    pub total_clicks: i64,
    pub amber_count: i64,
    pub euphoric_count: i64,
    pub stable_count: i64,
    pub depressed_count: i64,
    pub oldest_entry: Option<DateTime<Utc>>,
    pub newest_entry: Option<DateTime<Utc>>,
    pub payload_size_bytes: i64,
}
