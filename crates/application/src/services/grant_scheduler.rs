use focusgate_domain::{AlarmId, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{AlarmService, Notifier};

/// Keeps at most one pending warning/expiry alarm pair per domain.
///
/// Arming always clears any stale pair first, so overlapping grants can never
/// accumulate duplicate alarms. When the warning lead has already passed at
/// arm time the warning signal is emitted immediately instead of scheduled.
pub struct GrantScheduler {
    alarms: Arc<dyn AlarmService>,
    notifier: Arc<dyn Notifier>,
    warning_lead_ms: i64,
}

impl GrantScheduler {
    pub fn new(
        alarms: Arc<dyn AlarmService>,
        notifier: Arc<dyn Notifier>,
        warning_lead_seconds: u32,
    ) -> Self {
        Self {
            alarms,
            notifier,
            warning_lead_ms: i64::from(warning_lead_seconds) * 1000,
        }
    }

    /// Arms the pair for a grant ending at `until_ms`. Callers guarantee the
    /// deadline is still in the future; expired grants go through the reblock
    /// path instead.
    #[instrument(skip(self))]
    pub async fn arm(&self, domain: &str, until_ms: i64, now_ms: i64) -> Result<(), DomainError> {
        self.clear(domain).await;

        let warning_at = until_ms - self.warning_lead_ms;
        if warning_at > now_ms {
            self.alarms.arm(AlarmId::warning(domain), warning_at).await?;
        } else {
            self.notifier.notify_warning(domain).await;
        }

        self.alarms.arm(AlarmId::expiry(domain), until_ms).await?;

        debug!(
            domain,
            warning_in_ms = (warning_at - now_ms).max(0),
            expiry_in_ms = until_ms - now_ms,
            "Deadline pair armed"
        );
        Ok(())
    }

    /// Disarms both alarms for the domain. Safe on a domain with none.
    pub async fn clear(&self, domain: &str) {
        self.alarms.disarm(&AlarmId::warning(domain)).await;
        self.alarms.disarm(&AlarmId::expiry(domain)).await;
    }
}
