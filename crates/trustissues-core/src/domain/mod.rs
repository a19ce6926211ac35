//! Root-domain and display-name derivation.
//!
//! Both values come from the URL's hostname but serve different purposes:
//! [`RootDomain`] is the lookup and deduplication key, while the display name
//! is only used to title the modal. They are kept as separate derivations so a
//! single-label host never ends up keyed by its capitalized label.

mod display;
mod root;

pub use display::resolve_display_name;
pub use root::{resolve_root_domain, RootDomain};

/// Failure to derive a domain from a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The input did not parse as a URL, or the URL has no host.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Lowercased hostname labels with empty labels dropped.
///
/// Returns `None` when the URL does not parse or carries no host.
pub(crate) fn host_labels(url: &str) -> Option<(String, Vec<String>)> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let labels = host
        .split('.')
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    if labels.is_empty() {
        return None;
    }
    Some((host, labels))
}
