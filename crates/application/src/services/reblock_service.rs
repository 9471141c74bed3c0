use chrono::Utc;
use focusgate_domain::{DomainError, ReblockTrigger};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{HistoryRepository, Notifier, SiteRepository};
use crate::services::GrantScheduler;

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub reblocked: usize,
    pub rearmed: usize,
    pub failed: usize,
}

/// Transitions expired grants back to blocked and restores correct scheduler
/// state after the process was stopped or suspended.
pub struct ReblockService {
    sites: Arc<dyn SiteRepository>,
    history: Arc<dyn HistoryRepository>,
    scheduler: Arc<GrantScheduler>,
    notifier: Arc<dyn Notifier>,
}

impl ReblockService {
    pub fn new(
        sites: Arc<dyn SiteRepository>,
        history: Arc<dyn HistoryRepository>,
        scheduler: Arc<GrantScheduler>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            sites,
            history,
            scheduler,
            notifier,
        }
    }

    /// Blocks the domain again and closes its open history entry.
    ///
    /// Idempotent: the store reports whether the flip actually happened, the
    /// history close is a no-op when nothing is open, and clearing alarms is
    /// always safe. Only a state-changing expiry emits a notification.
    #[instrument(skip(self))]
    pub async fn reblock(
        &self,
        domain: &str,
        trigger: ReblockTrigger,
    ) -> Result<bool, DomainError> {
        let changed = self.sites.reblock(domain).await?;
        self.scheduler.clear(domain).await;

        let now_ms = Utc::now().timestamp_millis();
        self.history
            .close_open_entry(domain, trigger.is_auto(), now_ms)
            .await?;

        if changed {
            info!(domain, auto = trigger.is_auto(), "Site reblocked");
            if trigger.is_auto() {
                self.notifier.notify_reblocked(domain).await;
            }
        }

        Ok(changed)
    }

    /// Reblocks immediately when the deadline already passed, otherwise
    /// (re-)arms the scheduler for the remaining time.
    pub async fn schedule_or_reblock(
        &self,
        domain: &str,
        until_ms: i64,
        now_ms: i64,
    ) -> Result<(), DomainError> {
        if until_ms <= now_ms {
            self.reblock(domain, ReblockTrigger::Expiry).await?;
        } else {
            self.scheduler.arm(domain, until_ms, now_ms).await?;
        }
        Ok(())
    }

    /// Walks every active grant and restores it to a correct state: expired
    /// grants are reblocked as if their alarm had fired on time, live ones
    /// get a fresh alarm pair. A failure on one domain never stops the pass.
    #[instrument(skip(self))]
    pub async fn reconcile_all(&self) -> Result<ReconcileSummary, DomainError> {
        let grants = self.sites.get_active_grants().await?;
        let now_ms = Utc::now().timestamp_millis();

        let mut summary = ReconcileSummary::default();
        for site in grants {
            let Some(until_ms) = site.unblock_until else {
                continue;
            };
            match self.schedule_or_reblock(&site.domain, until_ms, now_ms).await {
                Ok(()) if until_ms <= now_ms => summary.reblocked += 1,
                Ok(()) => summary.rearmed += 1,
                Err(e) => {
                    summary.failed += 1;
                    warn!(domain = %site.domain, error = %e, "Reconciliation failed for domain");
                }
            }
        }

        info!(
            reblocked = summary.reblocked,
            rearmed = summary.rearmed,
            failed = summary.failed,
            "Reconciliation pass complete"
        );
        Ok(summary)
    }
}
