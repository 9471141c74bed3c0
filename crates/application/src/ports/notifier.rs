use async_trait::async_trait;
use focusgate_domain::Notification;

/// User-facing notification sink. All signals are fire-and-forget; the core
/// never consumes a return value from the presentation side.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// The grant is about to expire.
    async fn notify_warning(&self, domain: &str);

    /// The grant expired and the site is blocked again.
    async fn notify_reblocked(&self, domain: &str);

    /// The grant deadline was reset to a full duration.
    async fn notify_extended(&self, domain: &str, new_duration_minutes: u32);

    async fn dismiss(&self, notification_id: &str);

    /// Notifications currently shown, for the presentation layer to poll.
    fn active(&self) -> Vec<Notification>;
}
