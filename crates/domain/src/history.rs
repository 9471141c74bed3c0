use serde::{Deserialize, Serialize};

pub const MIN_REASON_CHARS: usize = 5;

/// One granted unblock. Entries are append-only: an entry is "open"
/// (`reblocked_at` is null) from grant start until the grant ends by any
/// path, and is closed exactly once. At most one entry per domain is open
/// at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Option<i64>,
    pub domain: String,
    pub reason: String,
    pub timestamp_ms: i64,
    pub grant_duration_minutes: u32,
    /// None while the grant is open, true when reverted by expiry,
    /// false when reverted manually.
    pub was_auto_reblocked: Option<bool>,
    pub reblocked_at: Option<i64>,
}

impl HistoryEntry {
    pub fn is_open(&self) -> bool {
        self.reblocked_at.is_none()
    }

    pub fn validate_reason(reason: &str) -> Result<(), String> {
        if reason.trim().chars().count() < MIN_REASON_CHARS {
            return Err(format!(
                "Reason must be at least {} characters",
                MIN_REASON_CHARS
            ));
        }
        Ok(())
    }
}

/// What ended a grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReblockTrigger {
    Expiry,
    Manual,
}

impl ReblockTrigger {
    pub fn is_auto(&self) -> bool {
        matches!(self, ReblockTrigger::Expiry)
    }
}
