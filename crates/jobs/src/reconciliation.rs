use focusgate_application::services::ReblockService;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodic safety sweep over the record store: reblocks grants whose
/// deadline passed while no alarm fired (suspend, crash, missed delivery)
/// and re-arms the rest. The startup pass runs the same logic; this job only
/// bounds how long a missed deadline can linger afterwards.
pub struct ReconciliationJob {
    reblock: Arc<ReblockService>,
    interval_secs: u64,
    cancellation: Option<CancellationToken>,
}

impl ReconciliationJob {
    pub fn new(reblock: Arc<ReblockService>, interval_secs: u64) -> Self {
        Self {
            reblock,
            interval_secs,
            cancellation: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting reconciliation job"
        );

        let token = self.cancellation.clone().unwrap_or_default();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // The immediate first tick would duplicate the startup pass.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        info!("Reconciliation job stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.reblock.reconcile_all().await {
                            Ok(summary) if summary.reblocked + summary.failed > 0 => {
                                info!(
                                    reblocked = summary.reblocked,
                                    failed = summary.failed,
                                    "Reconciliation sweep caught missed deadlines"
                                );
                            }
                            Ok(_) => {}
                            Err(e) => {
                                error!(error = %e, "Reconciliation sweep failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
