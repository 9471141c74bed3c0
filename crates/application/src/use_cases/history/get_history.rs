use focusgate_domain::{DomainError, HistoryEntry};
use std::sync::Arc;

use crate::ports::HistoryRepository;

pub struct GetHistoryUseCase {
    history: Arc<dyn HistoryRepository>,
}

impl GetHistoryUseCase {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    pub async fn execute(&self) -> Result<Vec<HistoryEntry>, DomainError> {
        self.history.get_all().await
    }
}
