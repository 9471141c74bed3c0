use chrono::Utc;
use focusgate_domain::{DomainError, GrantInfo, Site};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{Notifier, SiteRepository};
use crate::services::GrantScheduler;

/// Resets an active grant's deadline to a full duration from now and re-arms
/// the deadline pair. Returns None, mutating nothing, when the site is
/// blocked or unknown: a grant can only be extended while it is running.
pub struct ExtendGrantUseCase {
    sites: Arc<dyn SiteRepository>,
    scheduler: Arc<GrantScheduler>,
    notifier: Arc<dyn Notifier>,
}

impl ExtendGrantUseCase {
    pub fn new(
        sites: Arc<dyn SiteRepository>,
        scheduler: Arc<GrantScheduler>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            sites,
            scheduler,
            notifier,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<Option<GrantInfo>, DomainError> {
        let domain = Site::normalize_domain(domain);
        let now_ms = Utc::now().timestamp_millis();

        let Some(grant) = self.sites.extend_grant(&domain, now_ms).await? else {
            return Ok(None);
        };

        self.scheduler.arm(&grant.domain, grant.until_ms, now_ms).await?;
        self.notifier
            .notify_extended(&grant.domain, grant.duration_minutes)
            .await;

        info!(
            domain = %grant.domain,
            minutes = grant.duration_minutes,
            "Grant extended"
        );
        Ok(Some(grant))
    }
}
