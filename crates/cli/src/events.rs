use focusgate_application::ports::Notifier;
use focusgate_application::services::ReblockService;
use focusgate_domain::{AlarmId, ReblockTrigger};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Dispatches fired alarms. A warning alarm surfaces the expiry notice, an
/// expiry alarm runs the reblock engine, a dismiss alarm retires its
/// notification.
pub fn spawn_event_loop(
    mut alarm_rx: UnboundedReceiver<AlarmId>,
    reblock: Arc<ReblockService>,
    notifier: Arc<dyn Notifier>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(alarm) = alarm_rx.recv().await {
            match alarm {
                AlarmId::Warning { domain } => {
                    notifier.notify_warning(&domain).await;
                }
                AlarmId::Expiry { domain } => {
                    if let Err(e) = reblock.reblock(&domain, ReblockTrigger::Expiry).await {
                        // The periodic sweep retries missed expiries.
                        error!(%domain, error = %e, "Expiry handling failed");
                    }
                }
                AlarmId::NotificationDismiss { notification_id } => {
                    notifier.dismiss(&notification_id).await;
                }
            }
        }
        debug!("Alarm channel closed, event loop exiting");
    })
}
