use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use focusgate_application::ports::AlarmService;
use focusgate_domain::{AlarmId, DomainError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// In-process alarm adapter: one sleeping task per armed alarm, fired ids
/// delivered over an mpsc channel consumed by the event loop.
///
/// Pending tasks do not survive a restart; the reconciliation pass re-derives
/// every deadline from the record store, so the process never depends on this
/// map as authoritative state.
pub struct TokioAlarmService {
    pending: Arc<DashMap<AlarmId, (u64, JoinHandle<()>)>>,
    tx: mpsc::UnboundedSender<AlarmId>,
    seq: AtomicU64,
}

impl TokioAlarmService {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<AlarmId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Arc::new(Self {
            pending: Arc::new(DashMap::new()),
            tx,
            seq: AtomicU64::new(0),
        });
        (service, rx)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[async_trait]
impl AlarmService for TokioAlarmService {
    async fn arm(&self, id: AlarmId, fire_at_ms: i64) -> Result<(), DomainError> {
        // Re-arming an id replaces its pending task.
        if let Some((_, (_, handle))) = self.pending.remove(&id) {
            handle.abort();
        }

        let delay_ms = (fire_at_ms - Utc::now().timestamp_millis()).max(0) as u64;
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let tx = self.tx.clone();
        let pending = Arc::clone(&self.pending);
        let task_id = id.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            pending.remove_if(&task_id, |_, (entry_seq, _)| *entry_seq == seq);
            if tx.send(task_id).is_err() {
                debug!("Alarm fired after the event loop shut down");
            }
        });

        self.pending.insert(id, (seq, handle));
        Ok(())
    }

    async fn disarm(&self, id: &AlarmId) {
        if let Some((_, (_, handle))) = self.pending.remove(id) {
            handle.abort();
        }
    }
}
