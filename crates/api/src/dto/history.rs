use focusgate_domain::HistoryEntry;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryResponse {
    pub id: i64,
    pub domain: String,
    pub reason: String,
    pub timestamp_ms: i64,
    pub grant_duration_minutes: u32,
    pub was_auto_reblocked: Option<bool>,
    pub reblocked_at: Option<i64>,
}

impl HistoryEntryResponse {
    pub fn from_domain(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id.unwrap_or(0),
            domain: entry.domain,
            reason: entry.reason,
            timestamp_ms: entry.timestamp_ms,
            grant_duration_minutes: entry.grant_duration_minutes,
            was_auto_reblocked: entry.was_auto_reblocked,
            reblocked_at: entry.reblocked_at,
        }
    }
}
