use url::Url;

use crate::site::Site;

/// Extracts the hostname a candidate URL points at, normalized the same way
/// site domains are stored. Inputs without a scheme are treated as https
/// URLs; anything unparseable falls back to the raw string.
pub fn extract_hostname(raw: &str) -> String {
    let trimmed = raw.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    match Url::parse(&candidate) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => Site::normalize_domain(host),
            None => Site::normalize_domain(trimmed),
        },
        Err(_) => Site::normalize_domain(trimmed),
    }
}

/// Decides whether a candidate URL falls under a blocked domain, including
/// subdomains and known rebrand aliases (e.g. a service reachable under two
/// hostnames).
#[derive(Debug, Clone, Default)]
pub struct DomainMatcher {
    aliases: Vec<(String, String)>,
}

impl DomainMatcher {
    pub fn new(aliases: Vec<(String, String)>) -> Self {
        let aliases = aliases
            .into_iter()
            .map(|(a, b)| (Site::normalize_domain(&a), Site::normalize_domain(&b)))
            .collect();
        Self { aliases }
    }

    /// The hostname plus every alias it is known under.
    pub fn expand(&self, hostname: &str) -> Vec<String> {
        let mut candidates = vec![hostname.to_string()];
        for (a, b) in &self.aliases {
            if hostname == a && !candidates.contains(b) {
                candidates.push(b.clone());
            } else if hostname == b && !candidates.contains(a) {
                candidates.push(a.clone());
            }
        }
        candidates
    }

    /// Exact or dot-boundary subdomain match: blocking `example.com` covers
    /// `mail.example.com` but not `notexample.com` or `example.com.evil.org`.
    pub fn matches(candidate: &str, blocked: &str) -> bool {
        candidate == blocked || candidate.ends_with(&format!(".{blocked}"))
    }

    pub fn is_blocked_by<'a, I>(&self, url: &str, blocked_domains: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let hostname = extract_hostname(url);
        let candidates = self.expand(&hostname);

        blocked_domains.into_iter().any(|blocked| {
            let blocked = Site::normalize_domain(blocked);
            candidates
                .iter()
                .any(|candidate| Self::matches(candidate, &blocked))
        })
    }
}
