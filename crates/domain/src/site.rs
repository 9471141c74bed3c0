use serde::{Deserialize, Serialize};

/// A managed domain. `unblock_until` is non-null exactly while a timed grant
/// is active, i.e. while `is_blocked` is false and the deadline has not been
/// reconciled away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: Option<i64>,
    pub domain: String,
    pub is_blocked: bool,
    pub grant_duration_minutes: u32,
    pub unblock_until: Option<i64>,
    pub date_added: Option<String>,
}

impl Site {
    pub fn new(domain: String, grant_duration_minutes: u32) -> Self {
        Self {
            id: None,
            domain,
            is_blocked: true,
            grant_duration_minutes,
            unblock_until: None,
            date_added: None,
        }
    }

    /// Canonical storage key: lowercase, trimmed, leading `www.` stripped.
    pub fn normalize_domain(raw: &str) -> String {
        let domain = raw.trim().to_lowercase();
        domain
            .strip_prefix("www.")
            .map(|s| s.to_string())
            .unwrap_or(domain)
    }

    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if domain.is_empty() {
            return Err("Domain cannot be empty".to_string());
        }
        if domain.len() > 253 {
            return Err("Domain cannot exceed 253 characters".to_string());
        }
        let valid = domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
        if !valid {
            return Err(
                "Domain contains invalid characters (only alphanumeric, hyphens, dots and underscores are allowed)"
                    .to_string(),
            );
        }
        Ok(())
    }

    pub fn validate_duration(minutes: u32) -> Result<(), String> {
        if minutes == 0 {
            return Err("Grant duration must be at least one minute".to_string());
        }
        if minutes > 24 * 60 {
            return Err("Grant duration cannot exceed 24 hours".to_string());
        }
        Ok(())
    }

    pub fn grant_active(&self, now_ms: i64) -> bool {
        !self.is_blocked && self.unblock_until.is_some_and(|until| until > now_ms)
    }
}

/// Outcome of granting or extending a timed unblock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrantInfo {
    pub domain: String,
    pub duration_minutes: u32,
    pub until_ms: i64,
}
