use focusgate_domain::{DomainError, Site};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SiteRepository;
use crate::services::GrantScheduler;

pub struct RemoveSiteUseCase {
    sites: Arc<dyn SiteRepository>,
    scheduler: Arc<GrantScheduler>,
}

impl RemoveSiteUseCase {
    pub fn new(sites: Arc<dyn SiteRepository>, scheduler: Arc<GrantScheduler>) -> Self {
        Self { sites, scheduler }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<(), DomainError> {
        let domain = Site::normalize_domain(domain);

        // Pending deadlines must not outlive the record they belong to.
        self.scheduler.clear(&domain).await;
        self.sites.remove(&domain).await?;

        info!(%domain, "Site removed");
        Ok(())
    }
}
