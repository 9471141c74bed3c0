use focusgate_domain::{DomainError, ReblockTrigger, Site};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SiteRepository;
use crate::services::{GrantScheduler, ReblockService};

pub struct ToggleSiteUseCase {
    sites: Arc<dyn SiteRepository>,
    scheduler: Arc<GrantScheduler>,
    reblock: Arc<ReblockService>,
}

impl ToggleSiteUseCase {
    pub fn new(
        sites: Arc<dyn SiteRepository>,
        scheduler: Arc<GrantScheduler>,
        reblock: Arc<ReblockService>,
    ) -> Self {
        Self {
            sites,
            scheduler,
            reblock,
        }
    }

    /// Manually flips a site's block state. Blocking goes through the reblock
    /// engine so the open history entry is closed as a manual revert;
    /// unblocking clears the deadline pair and leaves the site open-ended
    /// (no grant, no timers).
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str, blocked: bool) -> Result<(), DomainError> {
        let domain = Site::normalize_domain(domain);

        self.sites
            .get(&domain)
            .await?
            .ok_or_else(|| DomainError::SiteNotFound(domain.clone()))?;

        if blocked {
            self.reblock.reblock(&domain, ReblockTrigger::Manual).await?;
        } else {
            self.scheduler.clear(&domain).await;
            self.sites.set_blocked(&domain, false).await?;
        }

        info!(%domain, blocked, "Site toggled");
        Ok(())
    }
}
