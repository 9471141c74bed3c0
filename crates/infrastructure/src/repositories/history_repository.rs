use async_trait::async_trait;
use focusgate_application::ports::HistoryRepository;
use focusgate_domain::{DomainError, HistoryEntry};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type HistoryRow = (i64, String, String, i64, i64, Option<i64>, Option<i64>);

pub struct SqliteHistoryRepository {
    pool: SqlitePool,
}

impl SqliteHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: HistoryRow) -> HistoryEntry {
        let (id, domain, reason, timestamp_ms, grant_duration_minutes, was_auto, reblocked_at) =
            row;
        HistoryEntry {
            id: Some(id),
            domain,
            reason,
            timestamp_ms,
            grant_duration_minutes: grant_duration_minutes as u32,
            was_auto_reblocked: was_auto.map(|v| v != 0),
            reblocked_at,
        }
    }

    fn db_err(context: &str, e: sqlx::Error) -> DomainError {
        error!(error = %e, "{context}");
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl HistoryRepository for SqliteHistoryRepository {
    #[instrument(skip(self, reason))]
    async fn append(
        &self,
        domain: &str,
        reason: &str,
        grant_duration_minutes: u32,
        now_ms: i64,
    ) -> Result<i64, DomainError> {
        let row = sqlx::query_as::<_, (i64,)>(
            "INSERT INTO unblock_history
             (domain, reason, timestamp_ms, grant_duration_minutes, was_auto_reblocked, reblocked_at)
             VALUES (?, ?, ?, ?, NULL, NULL)
             RETURNING id",
        )
        .bind(domain)
        .bind(reason)
        .bind(now_ms)
        .bind(i64::from(grant_duration_minutes))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to append history entry", e))?;

        Ok(row.0)
    }

    #[instrument(skip(self))]
    async fn close_open_entry(
        &self,
        domain: &str,
        auto_reblocked: bool,
        now_ms: i64,
    ) -> Result<bool, DomainError> {
        // Single statement keeps select-and-close atomic against concurrent
        // closers racing on the same domain.
        let result = sqlx::query(
            "UPDATE unblock_history SET was_auto_reblocked = ?, reblocked_at = ?
             WHERE id = (
                 SELECT id FROM unblock_history
                 WHERE domain = ? AND reblocked_at IS NULL
                 ORDER BY timestamp_ms DESC, id DESC
                 LIMIT 1
             )",
        )
        .bind(if auto_reblocked { 1i64 } else { 0i64 })
        .bind(now_ms)
        .bind(domain)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to close history entry", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<HistoryEntry>, DomainError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT id, domain, reason, timestamp_ms, grant_duration_minutes,
                    was_auto_reblocked, reblocked_at
             FROM unblock_history ORDER BY timestamp_ms DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to query history", e))?;

        Ok(rows.into_iter().map(Self::row_to_entry).collect())
    }
}
