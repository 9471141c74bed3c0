use serde::{Deserialize, Serialize};

/// A pair of hostnames that are the same service under two names
/// (product rebrands). Matching treats either side as the other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AliasPair {
    pub domain: String,
    pub alias: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    /// Default grant length for newly added sites.
    #[serde(default = "default_grant_minutes")]
    pub default_grant_minutes: u32,

    /// How long before expiry the warning fires.
    #[serde(default = "default_warning_lead_seconds")]
    pub warning_lead_seconds: u32,

    /// Interval of the background reconciliation sweep.
    #[serde(default = "default_reconcile_interval_secs")]
    pub reconcile_interval_secs: u64,

    #[serde(default = "default_aliases")]
    pub aliases: Vec<AliasPair>,
}

impl BlockingConfig {
    pub fn alias_pairs(&self) -> Vec<(String, String)> {
        self.aliases
            .iter()
            .map(|p| (p.domain.clone(), p.alias.clone()))
            .collect()
    }
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            default_grant_minutes: default_grant_minutes(),
            warning_lead_seconds: default_warning_lead_seconds(),
            reconcile_interval_secs: default_reconcile_interval_secs(),
            aliases: default_aliases(),
        }
    }
}

fn default_grant_minutes() -> u32 {
    10
}

fn default_warning_lead_seconds() -> u32 {
    60
}

fn default_reconcile_interval_secs() -> u64 {
    60
}

fn default_aliases() -> Vec<AliasPair> {
    vec![AliasPair {
        domain: "twitter.com".to_string(),
        alias: "x.com".to_string(),
    }]
}
