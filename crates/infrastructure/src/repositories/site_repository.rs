use async_trait::async_trait;
use focusgate_application::ports::SiteRepository;
use focusgate_domain::{DomainError, GrantInfo, Site};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type SiteRow = (i64, String, i64, i64, Option<i64>, String);

const MINUTE_MS: i64 = 60_000;

/// SQLite-backed site store. Every mutation is a single guarded UPDATE or
/// INSERT, so each read-modify-write on one domain's row is serializable;
/// rows of different domains never contend.
pub struct SqliteSiteRepository {
    pool: SqlitePool,
}

impl SqliteSiteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_site(row: SiteRow) -> Site {
        let (id, domain, is_blocked, grant_duration_minutes, unblock_until, date_added) = row;
        Site {
            id: Some(id),
            domain,
            is_blocked: is_blocked != 0,
            grant_duration_minutes: grant_duration_minutes as u32,
            unblock_until,
            date_added: Some(date_added),
        }
    }

    fn db_err(context: &str, e: sqlx::Error) -> DomainError {
        error!(error = %e, "{context}");
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl SiteRepository for SqliteSiteRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, domain: &str, grant_duration_minutes: u32) -> Result<Site, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let row = sqlx::query_as::<_, SiteRow>(
            "INSERT INTO sites (domain, is_blocked, grant_duration_minutes, unblock_until, date_added)
             VALUES (?, 1, ?, NULL, ?)
             ON CONFLICT(domain) DO UPDATE SET grant_duration_minutes = excluded.grant_duration_minutes
             RETURNING id, domain, is_blocked, grant_duration_minutes, unblock_until, date_added",
        )
        .bind(domain)
        .bind(i64::from(grant_duration_minutes))
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to upsert site", e))?;

        Ok(Self::row_to_site(row))
    }

    #[instrument(skip(self))]
    async fn get(&self, domain: &str) -> Result<Option<Site>, DomainError> {
        let row = sqlx::query_as::<_, SiteRow>(
            "SELECT id, domain, is_blocked, grant_duration_minutes, unblock_until, date_added
             FROM sites WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to query site", e))?;

        Ok(row.map(Self::row_to_site))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Site>, DomainError> {
        let rows = sqlx::query_as::<_, SiteRow>(
            "SELECT id, domain, is_blocked, grant_duration_minutes, unblock_until, date_added
             FROM sites ORDER BY domain ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to query all sites", e))?;

        Ok(rows.into_iter().map(Self::row_to_site).collect())
    }

    #[instrument(skip(self))]
    async fn get_blocked(&self) -> Result<Vec<Site>, DomainError> {
        let rows = sqlx::query_as::<_, SiteRow>(
            "SELECT id, domain, is_blocked, grant_duration_minutes, unblock_until, date_added
             FROM sites WHERE is_blocked = 1 ORDER BY domain ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to query blocked sites", e))?;

        Ok(rows.into_iter().map(Self::row_to_site).collect())
    }

    #[instrument(skip(self))]
    async fn get_active_grants(&self) -> Result<Vec<Site>, DomainError> {
        let rows = sqlx::query_as::<_, SiteRow>(
            "SELECT id, domain, is_blocked, grant_duration_minutes, unblock_until, date_added
             FROM sites WHERE is_blocked = 0 AND unblock_until IS NOT NULL
             ORDER BY unblock_until ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to query active grants", e))?;

        Ok(rows.into_iter().map(Self::row_to_site).collect())
    }

    #[instrument(skip(self))]
    async fn set_blocked(&self, domain: &str, blocked: bool) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE sites SET is_blocked = ?, unblock_until = NULL WHERE domain = ?",
        )
        .bind(if blocked { 1i64 } else { 0i64 })
        .bind(domain)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to set block state", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn reblock(&self, domain: &str) -> Result<bool, DomainError> {
        // The is_blocked guard makes a repeated reblock observable as a no-op.
        let result = sqlx::query(
            "UPDATE sites SET is_blocked = 1, unblock_until = NULL
             WHERE domain = ? AND is_blocked = 0",
        )
        .bind(domain)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to reblock site", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn grant_unblock(
        &self,
        domain: &str,
        now_ms: i64,
    ) -> Result<Option<GrantInfo>, DomainError> {
        let row = sqlx::query_as::<_, (String, i64, i64)>(
            "UPDATE sites
             SET is_blocked = 0, unblock_until = ? + grant_duration_minutes * ?
             WHERE domain = ?
             RETURNING domain, grant_duration_minutes, unblock_until",
        )
        .bind(now_ms)
        .bind(MINUTE_MS)
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to grant unblock", e))?;

        Ok(row.map(|(domain, minutes, until_ms)| GrantInfo {
            domain,
            duration_minutes: minutes as u32,
            until_ms,
        }))
    }

    #[instrument(skip(self))]
    async fn extend_grant(
        &self,
        domain: &str,
        now_ms: i64,
    ) -> Result<Option<GrantInfo>, DomainError> {
        let row = sqlx::query_as::<_, (String, i64, i64)>(
            "UPDATE sites
             SET unblock_until = ? + grant_duration_minutes * ?
             WHERE domain = ? AND is_blocked = 0
             RETURNING domain, grant_duration_minutes, unblock_until",
        )
        .bind(now_ms)
        .bind(MINUTE_MS)
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::db_err("Failed to extend grant", e))?;

        Ok(row.map(|(domain, minutes, until_ms)| GrantInfo {
            domain,
            duration_minutes: minutes as u32,
            until_ms,
        }))
    }

    #[instrument(skip(self))]
    async fn set_duration(&self, domain: &str, minutes: u32) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE sites SET grant_duration_minutes = ? WHERE domain = ?")
            .bind(i64::from(minutes))
            .bind(domain)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("Failed to update grant duration", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove(&self, domain: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM sites WHERE domain = ?")
            .bind(domain)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("Failed to remove site", e))?;

        Ok(())
    }
}
