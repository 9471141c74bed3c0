use focusgate_domain::{DomainError, DomainMatcher};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::SiteRepository;

/// Hot-path query for the navigation hook: should this URL be blocked right
/// now? Reads only; never mutates.
pub struct CheckUrlUseCase {
    sites: Arc<dyn SiteRepository>,
    matcher: DomainMatcher,
}

impl CheckUrlUseCase {
    pub fn new(sites: Arc<dyn SiteRepository>, matcher: DomainMatcher) -> Self {
        Self { sites, matcher }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<bool, DomainError> {
        let blocked_sites = self.sites.get_blocked().await?;
        let blocked = self
            .matcher
            .is_blocked_by(url, blocked_sites.iter().map(|s| s.domain.as_str()));

        debug!(url, blocked, "Navigation check");
        Ok(blocked)
    }
}
