use chrono::Utc;
use focusgate_domain::{DomainError, UnblockStats};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::HistoryRepository;

pub struct GetStatsUseCase {
    history: Arc<dyn HistoryRepository>,
}

impl GetStatsUseCase {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<UnblockStats, DomainError> {
        let entries = self.history.get_all().await?;
        Ok(UnblockStats::compute(&entries, Utc::now()))
    }
}
