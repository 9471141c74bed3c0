use focusgate_domain::{GrantInfo, Site};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResponse {
    pub domain: String,
    pub is_blocked: bool,
    pub grant_duration_minutes: u32,
    pub unblock_until: Option<i64>,
    pub date_added: Option<String>,
}

impl SiteResponse {
    pub fn from_domain(site: Site) -> Self {
        Self {
            domain: site.domain,
            is_blocked: site.is_blocked,
            grant_duration_minutes: site.grant_duration_minutes,
            unblock_until: site.unblock_until,
            date_added: site.date_added,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddSiteRequest {
    pub url: String,
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleSiteRequest {
    pub blocked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDurationRequest {
    pub minutes: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnblockSiteRequest {
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrantResponse {
    pub domain: String,
    pub duration_minutes: u32,
    pub until_ms: i64,
}

impl GrantResponse {
    pub fn from_domain(grant: GrantInfo) -> Self {
        Self {
            domain: grant.domain,
            duration_minutes: grant.duration_minutes,
            until_ms: grant.until_ms,
        }
    }
}

/// `extended` is false when the grant could not be extended (site blocked or
/// unknown); the caller decides how to surface that.
#[derive(Debug, Clone, Serialize)]
pub struct ExtendResponse {
    pub extended: bool,
    pub grant: Option<GrantResponse>,
}
