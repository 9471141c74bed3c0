use focusgate_domain::{DomainError, Site};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SiteRepository;

pub struct UpdateDurationUseCase {
    sites: Arc<dyn SiteRepository>,
}

impl UpdateDurationUseCase {
    pub fn new(sites: Arc<dyn SiteRepository>) -> Self {
        Self { sites }
    }

    /// Changes the default grant length. A running grant keeps its current
    /// deadline; the new duration applies from the next grant or extension.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str, minutes: u32) -> Result<(), DomainError> {
        let domain = Site::normalize_domain(domain);
        Site::validate_duration(minutes).map_err(DomainError::InvalidDuration)?;

        let found = self.sites.set_duration(&domain, minutes).await?;
        if !found {
            return Err(DomainError::SiteNotFound(domain));
        }

        info!(%domain, minutes, "Default grant duration updated");
        Ok(())
    }
}
