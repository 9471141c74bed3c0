#![allow(dead_code)]

use async_trait::async_trait;
use focusgate_application::ports::{AlarmService, HistoryRepository, Notifier, SiteRepository};
use focusgate_domain::{
    AlarmId, DomainError, GrantInfo, HistoryEntry, Notification, Site,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

const MINUTE_MS: i64 = 60_000;

pub struct MockSiteRepository {
    sites: RwLock<HashMap<String, Site>>,
    fail_reblock: RwLock<HashSet<String>>,
}

impl MockSiteRepository {
    pub fn new() -> Self {
        Self {
            sites: RwLock::new(HashMap::new()),
            fail_reblock: RwLock::new(HashSet::new()),
        }
    }

    pub async fn insert_blocked(&self, domain: &str, minutes: u32) {
        let site = Site::new(domain.to_string(), minutes);
        self.sites.write().await.insert(domain.to_string(), site);
    }

    pub async fn insert_granted(&self, domain: &str, minutes: u32, until_ms: i64) {
        let mut site = Site::new(domain.to_string(), minutes);
        site.is_blocked = false;
        site.unblock_until = Some(until_ms);
        self.sites.write().await.insert(domain.to_string(), site);
    }

    pub async fn set_fail_reblock(&self, domain: &str) {
        self.fail_reblock.write().await.insert(domain.to_string());
    }

    pub async fn site(&self, domain: &str) -> Option<Site> {
        self.sites.read().await.get(domain).cloned()
    }

    /// The §3 invariant: a deadline exists exactly while the site is
    /// unblocked with a live grant.
    pub async fn assert_invariant(&self) {
        for site in self.sites.read().await.values() {
            if site.is_blocked {
                assert!(
                    site.unblock_until.is_none(),
                    "blocked site {} still has a deadline",
                    site.domain
                );
            }
        }
    }
}

#[async_trait]
impl SiteRepository for MockSiteRepository {
    async fn upsert(&self, domain: &str, grant_duration_minutes: u32) -> Result<Site, DomainError> {
        let mut sites = self.sites.write().await;
        let site = sites
            .entry(domain.to_string())
            .or_insert_with(|| Site::new(domain.to_string(), grant_duration_minutes));
        site.grant_duration_minutes = grant_duration_minutes;
        Ok(site.clone())
    }

    async fn get(&self, domain: &str) -> Result<Option<Site>, DomainError> {
        Ok(self.sites.read().await.get(domain).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Site>, DomainError> {
        Ok(self.sites.read().await.values().cloned().collect())
    }

    async fn get_blocked(&self) -> Result<Vec<Site>, DomainError> {
        Ok(self
            .sites
            .read()
            .await
            .values()
            .filter(|s| s.is_blocked)
            .cloned()
            .collect())
    }

    async fn get_active_grants(&self) -> Result<Vec<Site>, DomainError> {
        Ok(self
            .sites
            .read()
            .await
            .values()
            .filter(|s| !s.is_blocked && s.unblock_until.is_some())
            .cloned()
            .collect())
    }

    async fn set_blocked(&self, domain: &str, blocked: bool) -> Result<bool, DomainError> {
        let mut sites = self.sites.write().await;
        match sites.get_mut(domain) {
            Some(site) => {
                site.is_blocked = blocked;
                site.unblock_until = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reblock(&self, domain: &str) -> Result<bool, DomainError> {
        if self.fail_reblock.read().await.contains(domain) {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        let mut sites = self.sites.write().await;
        match sites.get_mut(domain) {
            Some(site) if !site.is_blocked => {
                site.is_blocked = true;
                site.unblock_until = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn grant_unblock(
        &self,
        domain: &str,
        now_ms: i64,
    ) -> Result<Option<GrantInfo>, DomainError> {
        let mut sites = self.sites.write().await;
        match sites.get_mut(domain) {
            Some(site) => {
                site.is_blocked = false;
                let until = now_ms + i64::from(site.grant_duration_minutes) * MINUTE_MS;
                site.unblock_until = Some(until);
                Ok(Some(GrantInfo {
                    domain: site.domain.clone(),
                    duration_minutes: site.grant_duration_minutes,
                    until_ms: until,
                }))
            }
            None => Ok(None),
        }
    }

    async fn extend_grant(
        &self,
        domain: &str,
        now_ms: i64,
    ) -> Result<Option<GrantInfo>, DomainError> {
        let mut sites = self.sites.write().await;
        match sites.get_mut(domain) {
            Some(site) if !site.is_blocked => {
                let until = now_ms + i64::from(site.grant_duration_minutes) * MINUTE_MS;
                site.unblock_until = Some(until);
                Ok(Some(GrantInfo {
                    domain: site.domain.clone(),
                    duration_minutes: site.grant_duration_minutes,
                    until_ms: until,
                }))
            }
            _ => Ok(None),
        }
    }

    async fn set_duration(&self, domain: &str, minutes: u32) -> Result<bool, DomainError> {
        let mut sites = self.sites.write().await;
        match sites.get_mut(domain) {
            Some(site) => {
                site.grant_duration_minutes = minutes;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, domain: &str) -> Result<(), DomainError> {
        self.sites.write().await.remove(domain);
        Ok(())
    }
}

pub struct MockHistoryRepository {
    entries: RwLock<Vec<HistoryEntry>>,
    next_id: AtomicI64,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.clone()
    }

    pub async fn open_count(&self, domain: &str) -> usize {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.domain == domain && e.is_open())
            .count()
    }

    pub async fn latest(&self, domain: &str) -> Option<HistoryEntry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.domain == domain)
            .max_by_key(|e| (e.timestamp_ms, e.id))
            .cloned()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn append(
        &self,
        domain: &str,
        reason: &str,
        grant_duration_minutes: u32,
        now_ms: i64,
    ) -> Result<i64, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.write().await.push(HistoryEntry {
            id: Some(id),
            domain: domain.to_string(),
            reason: reason.to_string(),
            timestamp_ms: now_ms,
            grant_duration_minutes,
            was_auto_reblocked: None,
            reblocked_at: None,
        });
        Ok(id)
    }

    async fn close_open_entry(
        &self,
        domain: &str,
        auto_reblocked: bool,
        now_ms: i64,
    ) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        let open = entries
            .iter_mut()
            .filter(|e| e.domain == domain && e.is_open())
            .max_by_key(|e| (e.timestamp_ms, e.id));
        match open {
            Some(entry) => {
                entry.was_auto_reblocked = Some(auto_reblocked);
                entry.reblocked_at = Some(now_ms);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_all(&self) -> Result<Vec<HistoryEntry>, DomainError> {
        let mut entries = self.entries.read().await.clone();
        entries.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));
        Ok(entries)
    }
}

pub struct MockAlarmService {
    armed: RwLock<HashMap<AlarmId, i64>>,
}

impl MockAlarmService {
    pub fn new() -> Self {
        Self {
            armed: RwLock::new(HashMap::new()),
        }
    }

    pub async fn pending(&self) -> Vec<AlarmId> {
        self.armed.read().await.keys().cloned().collect()
    }

    pub async fn fire_time(&self, id: &AlarmId) -> Option<i64> {
        self.armed.read().await.get(id).copied()
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
    warnings: RwLock<Vec<String>>,
    reblocked: RwLock<Vec<String>>,
    extended: RwLock<Vec<(String, u32)>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            warnings: RwLock::new(Vec::new()),
            reblocked: RwLock::new(Vec::new()),
            extended: RwLock::new(Vec::new()),
        }
    }

    pub async fn warnings(&self) -> Vec<String> {
        self.warnings.read().await.clone()
    }

    pub async fn reblocked(&self) -> Vec<String> {
        self.reblocked.read().await.clone()
    }

    pub async fn extended(&self) -> Vec<(String, u32)> {
        self.extended.read().await.clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify_warning(&self, domain: &str) {
        self.warnings.write().await.push(domain.to_string());
    }

    async fn notify_reblocked(&self, domain: &str) {
        self.reblocked.write().await.push(domain.to_string());
    }

    async fn notify_extended(&self, domain: &str, new_duration_minutes: u32) {
        self.extended
            .write()
            .await
            .push((domain.to_string(), new_duration_minutes));
    }

    async fn dismiss(&self, _notification_id: &str) {}

    fn active(&self) -> Vec<Notification> {
        Vec::new()
    }
}
