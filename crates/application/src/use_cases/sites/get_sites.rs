use focusgate_domain::{DomainError, Site};
use std::sync::Arc;

use crate::ports::SiteRepository;

pub struct GetSitesUseCase {
    sites: Arc<dyn SiteRepository>,
}

impl GetSitesUseCase {
    pub fn new(sites: Arc<dyn SiteRepository>) -> Self {
        Self { sites }
    }

    pub async fn all(&self) -> Result<Vec<Site>, DomainError> {
        self.sites.get_all().await
    }

    pub async fn blocked(&self) -> Result<Vec<Site>, DomainError> {
        self.sites.get_blocked().await
    }

    pub async fn by_domain(&self, domain: &str) -> Result<Option<Site>, DomainError> {
        self.sites.get(&Site::normalize_domain(domain)).await
    }
}
