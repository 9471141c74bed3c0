use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use focusgate_application::ports::{AlarmService, Notifier};
use focusgate_domain::{AlarmId, Notification};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

const AUTO_DISMISS_MS: i64 = 5_000;

/// Holds the notifications currently shown to the user. Each one arms a
/// dismiss alarm so it disappears on its own; the presentation layer polls
/// `active()` and renders whatever is there.
pub struct NotificationCenter {
    alarms: Arc<dyn AlarmService>,
    active: DashMap<String, Notification>,
    seq: AtomicU64,
    auto_dismiss_ms: i64,
}

impl NotificationCenter {
    pub fn new(alarms: Arc<dyn AlarmService>) -> Self {
        Self {
            alarms,
            active: DashMap::new(),
            seq: AtomicU64::new(0),
            auto_dismiss_ms: AUTO_DISMISS_MS,
        }
    }

    pub fn with_auto_dismiss_ms(mut self, ms: i64) -> Self {
        self.auto_dismiss_ms = ms;
        self
    }

    async fn publish(&self, id: String, title: &str, message: String) {
        let now_ms = Utc::now().timestamp_millis();
        info!(notification = %id, %message, "Notification published");

        self.active.insert(
            id.clone(),
            Notification {
                id: id.clone(),
                title: title.to_string(),
                message,
                created_at_ms: now_ms,
            },
        );

        let dismiss_at = now_ms + self.auto_dismiss_ms;
        if let Err(e) = self.alarms.arm(AlarmId::dismiss(&id), dismiss_at).await {
            warn!(error = %e, notification = %id, "Failed to arm auto-dismiss alarm");
        }
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl Notifier for NotificationCenter {
    async fn notify_warning(&self, domain: &str) {
        // Stable id: a repeated warning for the same domain replaces the
        // previous one instead of stacking.
        self.publish(
            format!("warning-{domain}"),
            "Time running out",
            format!("{domain} will be blocked again in less than a minute."),
        )
        .await;
    }

    async fn notify_reblocked(&self, domain: &str) {
        self.publish(
            format!("reblocked-{domain}-{}", self.next_seq()),
            "Back to focus",
            format!("{domain} is blocked again."),
        )
        .await;
    }

    async fn notify_extended(&self, domain: &str, new_duration_minutes: u32) {
        self.publish(
            format!("extended-{domain}-{}", self.next_seq()),
            "Timer extended",
            format!("{domain} unblocked for {new_duration_minutes} more minutes."),
        )
        .await;
    }

    async fn dismiss(&self, notification_id: &str) {
        self.active.remove(notification_id);
    }

    fn active(&self) -> Vec<Notification> {
        let mut notifications: Vec<_> =
            self.active.iter().map(|entry| entry.value().clone()).collect();
        notifications.sort_by_key(|n| n.created_at_ms);
        notifications
    }
}
