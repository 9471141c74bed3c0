use crate::ReconciliationJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

impl SpawnableJob for ReconciliationJob {
    fn with_cancellation(self, token: CancellationToken) -> Self {
        self.with_cancellation(token)
    }

    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.start().await })
    }
}

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job();
    }
}

pub struct JobRunner {
    reconciliation: Option<ReconciliationJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            reconciliation: None,
            shutdown: None,
        }
    }

    pub fn with_reconciliation(mut self, job: ReconciliationJob) -> Self {
        self.reconciliation = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        spawn_job(self.reconciliation, &self.shutdown);

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
