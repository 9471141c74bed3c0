#![allow(dead_code)]

use async_trait::async_trait;
use focusgate_application::ports::{AlarmService, Notifier};
use focusgate_application::services::{GrantScheduler, ReblockService};
use focusgate_infrastructure::repositories::{SqliteHistoryRepository, SqliteSiteRepository};
use focusgate_domain::{AlarmId, DomainError, Notification};
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockAlarmService {
    armed: RwLock<HashMap<AlarmId, i64>>,
}

impl MockAlarmService {
    pub fn new() -> Self {
        Self {
            armed: RwLock::new(HashMap::new()),
        }
    }

    pub async fn pending_count(&self) -> usize {
        self.armed.read().await.len()
    }
}

#[async_trait]
impl AlarmService for MockAlarmService {
    async fn arm(&self, id: AlarmId, fire_at_ms: i64) -> Result<(), DomainError> {
        self.armed.write().await.insert(id, fire_at_ms);
        Ok(())
    }

    async fn disarm(&self, id: &AlarmId) {
        self.armed.write().await.remove(id);
    }
}

pub struct MockNotifier {
    reblocked: RwLock<Vec<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            reblocked: RwLock::new(Vec::new()),
        }
    }

    pub async fn reblocked(&self) -> Vec<String> {
        self.reblocked.read().await.clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify_warning(&self, _domain: &str) {}

    async fn notify_reblocked(&self, domain: &str) {
        self.reblocked.write().await.push(domain.to_string());
    }

    async fn notify_extended(&self, _domain: &str, _new_duration_minutes: u32) {}

    async fn dismiss(&self, _notification_id: &str) {}

    fn active(&self) -> Vec<Notification> {
        Vec::new()
    }
}

pub struct Fixture {
    pub sites: Arc<SqliteSiteRepository>,
    pub history: Arc<SqliteHistoryRepository>,
    pub alarms: Arc<MockAlarmService>,
    pub notifier: Arc<MockNotifier>,
    pub reblock: Arc<ReblockService>,
}

pub async fn fixture() -> Fixture {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE sites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain TEXT NOT NULL UNIQUE,
            is_blocked INTEGER NOT NULL DEFAULT 1,
            grant_duration_minutes INTEGER NOT NULL DEFAULT 10,
            unblock_until INTEGER,
            date_added TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE unblock_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain TEXT NOT NULL,
            reason TEXT NOT NULL,
            timestamp_ms INTEGER NOT NULL,
            grant_duration_minutes INTEGER NOT NULL DEFAULT 10,
            was_auto_reblocked INTEGER,
            reblocked_at INTEGER
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    let sites = Arc::new(SqliteSiteRepository::new(pool.clone()));
    let history = Arc::new(SqliteHistoryRepository::new(pool));
    let alarms = Arc::new(MockAlarmService::new());
    let notifier = Arc::new(MockNotifier::new());
    let scheduler = Arc::new(GrantScheduler::new(alarms.clone(), notifier.clone(), 60));
    let reblock = Arc::new(ReblockService::new(
        sites.clone(),
        history.clone(),
        scheduler,
        notifier.clone(),
    ));

    Fixture {
        sites,
        history,
        alarms,
        notifier,
        reblock,
    }
}
