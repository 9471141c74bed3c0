use chrono::Utc;
use focusgate_domain::{DomainError, GrantInfo, HistoryEntry, Site};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{HistoryRepository, SiteRepository};
use crate::services::ReblockService;

/// Starts a timed grant: records the reason in history (the entry stays open
/// until the grant ends), unblocks the site for its default duration, and
/// arms the deadline pair.
pub struct UnblockSiteUseCase {
    sites: Arc<dyn SiteRepository>,
    history: Arc<dyn HistoryRepository>,
    reblock: Arc<ReblockService>,
}

impl UnblockSiteUseCase {
    pub fn new(
        sites: Arc<dyn SiteRepository>,
        history: Arc<dyn HistoryRepository>,
        reblock: Arc<ReblockService>,
    ) -> Self {
        Self {
            sites,
            history,
            reblock,
        }
    }

    #[instrument(skip(self, reason))]
    pub async fn execute(&self, domain: &str, reason: &str) -> Result<GrantInfo, DomainError> {
        let reason = reason.trim();
        HistoryEntry::validate_reason(reason).map_err(DomainError::InvalidReason)?;

        let domain = Site::normalize_domain(domain);
        let site = self
            .sites
            .get(&domain)
            .await?
            .ok_or_else(|| DomainError::SiteNotFound(domain.clone()))?;

        let now_ms = Utc::now().timestamp_millis();

        // A fresh grant supersedes a still-running one; close its entry so
        // the domain never carries two open history rows.
        self.history.close_open_entry(&site.domain, false, now_ms).await?;
        self.history
            .append(&site.domain, reason, site.grant_duration_minutes, now_ms)
            .await?;

        let grant = self
            .sites
            .grant_unblock(&site.domain, now_ms)
            .await?
            .ok_or(DomainError::SiteNotFound(domain))?;

        self.reblock
            .schedule_or_reblock(&grant.domain, grant.until_ms, now_ms)
            .await?;

        info!(
            domain = %grant.domain,
            minutes = grant.duration_minutes,
            "Timed unblock granted"
        );
        Ok(grant)
    }
}
