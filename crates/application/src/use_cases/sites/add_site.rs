use focusgate_domain::{matcher, DomainError, Site};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SiteRepository;

pub struct AddSiteUseCase {
    sites: Arc<dyn SiteRepository>,
    default_grant_minutes: u32,
}

impl AddSiteUseCase {
    pub fn new(sites: Arc<dyn SiteRepository>, default_grant_minutes: u32) -> Self {
        Self {
            sites,
            default_grant_minutes,
        }
    }

    /// Accepts a full URL or a bare domain; either way the stored key is the
    /// normalized hostname. A newly added site starts blocked.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        url: &str,
        grant_duration_minutes: Option<u32>,
    ) -> Result<Site, DomainError> {
        let domain = matcher::extract_hostname(url);
        Site::validate_domain(&domain).map_err(DomainError::InvalidDomainName)?;

        let minutes = grant_duration_minutes.unwrap_or(self.default_grant_minutes);
        Site::validate_duration(minutes).map_err(DomainError::InvalidDuration)?;

        let site = self.sites.upsert(&domain, minutes).await?;
        info!(domain = %site.domain, minutes, "Site added");
        Ok(site)
    }
}
