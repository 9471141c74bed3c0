use async_trait::async_trait;
use focusgate_domain::{AlarmId, DomainError};

/// Durable deadline scheduling. The service delivers each armed id back to
/// the process at or after its absolute fire time; arming an id that is
/// already pending replaces it.
#[async_trait]
pub trait AlarmService: Send + Sync {
    async fn arm(&self, id: AlarmId, fire_at_ms: i64) -> Result<(), DomainError>;

    /// Fire-and-forget: disarming an id with no pending alarm is a no-op.
    async fn disarm(&self, id: &AlarmId);
}
