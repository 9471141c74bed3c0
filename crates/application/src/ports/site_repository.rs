use async_trait::async_trait;
use focusgate_domain::{DomainError, GrantInfo, Site};

/// Persistent store for managed domains. Every multi-step mutation is
/// executed as a single serializable unit against one domain's row;
/// operations on different domains never block each other.
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Create the site, or update its default grant duration when it already
    /// exists. Block state of an existing site is untouched.
    async fn upsert(&self, domain: &str, grant_duration_minutes: u32) -> Result<Site, DomainError>;

    async fn get(&self, domain: &str) -> Result<Option<Site>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Site>, DomainError>;

    async fn get_blocked(&self) -> Result<Vec<Site>, DomainError>;

    /// Sites with `is_blocked = false` and a non-null deadline.
    async fn get_active_grants(&self) -> Result<Vec<Site>, DomainError>;

    /// Sets the block flag and clears any deadline. Returns false when the
    /// domain is unknown.
    async fn set_blocked(&self, domain: &str, blocked: bool) -> Result<bool, DomainError>;

    /// Flips an unblocked site back to blocked and clears its deadline.
    /// Returns false when the site is unknown or already blocked, which makes
    /// repeated reblocks detectable and therefore idempotent.
    async fn reblock(&self, domain: &str) -> Result<bool, DomainError>;

    /// Starts a timed grant of the site's default duration. None when the
    /// domain is unknown.
    async fn grant_unblock(&self, domain: &str, now_ms: i64)
        -> Result<Option<GrantInfo>, DomainError>;

    /// Resets an active grant's deadline to a full duration from now. None
    /// when the domain is unknown or currently blocked; a grant can only be
    /// extended while it is running.
    async fn extend_grant(&self, domain: &str, now_ms: i64)
        -> Result<Option<GrantInfo>, DomainError>;

    /// Returns false when the domain is unknown.
    async fn set_duration(&self, domain: &str, minutes: u32) -> Result<bool, DomainError>;

    async fn remove(&self, domain: &str) -> Result<(), DomainError>;
}
