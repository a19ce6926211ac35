//! Root-domain heuristic: last two hostname labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{host_labels, DomainError};

/// Lookup key for the warning service: the last two labels of a hostname.
///
/// This is a string heuristic, not a public-suffix lookup, so multi-part
/// TLDs collapse too far (`shop.example.co.uk` becomes `co.uk`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootDomain(String);

impl RootDomain {
    /// Wrap an already-derived domain (e.g. from the command line).
    /// The value is lowercased; no other validation is applied.
    pub fn new(domain: impl AsRef<str>) -> Self {
        Self(domain.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the domain has at least one `.`; hosts like `localhost`
    /// are never sent to the warning service.
    pub fn is_lookupable(&self) -> bool {
        self.0.contains('.')
    }
}

impl fmt::Display for RootDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RootDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the root domain of `url`.
///
/// # Examples
///
/// - `https://mail.google.com/x` → `google.com`
/// - `https://example.com` → `example.com`
/// - `http://localhost:8000` → `localhost`
pub fn resolve_root_domain(url: &str) -> Result<RootDomain, DomainError> {
    let (host, labels) =
        host_labels(url).ok_or_else(|| DomainError::InvalidUrl(url.to_string()))?;

    if labels.len() >= 3 {
        return Ok(RootDomain(labels[labels.len() - 2..].join(".")));
    }
    Ok(RootDomain(host.trim_end_matches('.').to_string()))
}
