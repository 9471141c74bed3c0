use async_trait::async_trait;
use focusgate_domain::{DomainError, HistoryEntry};

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Records the start of a grant; the new entry is open until closed.
    async fn append(
        &self,
        domain: &str,
        reason: &str,
        grant_duration_minutes: u32,
        now_ms: i64,
    ) -> Result<i64, DomainError>;

    /// Closes the most recent open entry for the domain. Returns false when
    /// no entry is open, which is expected (e.g. a manual toggle without a
    /// prior grant).
    async fn close_open_entry(
        &self,
        domain: &str,
        auto_reblocked: bool,
        now_ms: i64,
    ) -> Result<bool, DomainError>;

    /// All entries, newest first.
    async fn get_all(&self) -> Result<Vec<HistoryEntry>, DomainError>;
}
