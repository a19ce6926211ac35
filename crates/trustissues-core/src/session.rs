//! Per-process session state.
//!
//! Tracks which root domains have already been checked (with the lifecycle
//! state of each lookup) plus the active tab and its root domain. A session
//! lives for the whole process; there is no eviction and no reset path other
//! than creating a new one.

use std::collections::HashMap;

use crate::domain::RootDomain;

/// Host-assigned tab identifier.
pub type TabId = u64;

/// Lifecycle of a lookup for one domain. Domains never looked up are `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    InFlight,
    Resolved,
    Failed,
}

/// Result of trying to claim a domain for a remote lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// Caller owns the lookup and must finish it with `resolve` or `fail`.
    Claimed,
    /// Already in flight or resolved; no remote call should be made.
    AlreadySeen(LookupState),
}

#[derive(Debug, Default)]
pub struct SessionState {
    lookups: HashMap<RootDomain, LookupState>,
    current_tab: Option<TabId>,
    current_root_domain: Option<RootDomain>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, domain: &RootDomain) -> LookupState {
        self.lookups.get(domain).copied().unwrap_or_default()
    }

    /// True once a lookup for `domain` has been started in this session.
    pub fn has_seen(&self, domain: &RootDomain) -> bool {
        self.lookups.contains_key(domain)
    }

    pub fn seen_count(&self) -> usize {
        self.lookups.len()
    }

    pub fn seen_domains(&self) -> impl Iterator<Item = &RootDomain> {
        self.lookups.keys()
    }

    /// Check-and-mark in one step: claims `domain` unless a lookup is already
    /// in flight or resolved. Failed domains can be claimed again.
    pub fn claim(&mut self, domain: &RootDomain) -> Claim {
        match self.state(domain) {
            s @ (LookupState::InFlight | LookupState::Resolved) => Claim::AlreadySeen(s),
            LookupState::Idle | LookupState::Failed => {
                self.lookups.insert(domain.clone(), LookupState::InFlight);
                Claim::Claimed
            }
        }
    }

    pub fn resolve(&mut self, domain: &RootDomain) {
        self.lookups.insert(domain.clone(), LookupState::Resolved);
    }

    pub fn fail(&mut self, domain: &RootDomain) {
        self.lookups.insert(domain.clone(), LookupState::Failed);
    }

    pub fn current_tab(&self) -> Option<TabId> {
        self.current_tab
    }

    pub fn current_root_domain(&self) -> Option<&RootDomain> {
        self.current_root_domain.as_ref()
    }

    /// Record the active tab and, when known, its root domain.
    /// Returns true when the active root domain changed.
    pub fn set_active(&mut self, tab: TabId, domain: Option<RootDomain>) -> bool {
        self.current_tab = Some(tab);
        let changed = self.current_root_domain != domain;
        self.current_root_domain = domain;
        changed
    }

    /// Record a navigation; only navigations of the active tab move the
    /// current root domain. Returns true when it changed.
    pub fn record_navigation(&mut self, tab: TabId, domain: RootDomain) -> bool {
        if self.current_tab != Some(tab) {
            return false;
        }
        let changed = self.current_root_domain.as_ref() != Some(&domain);
        self.current_root_domain = Some(domain);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> RootDomain {
        RootDomain::new(s)
    }

    #[test]
    fn new_session_has_seen_nothing() {
        let s = SessionState::new();
        assert_eq!(s.seen_count(), 0);
        assert_eq!(s.state(&d("example.com")), LookupState::Idle);
        assert!(s.current_tab().is_none());
    }

    #[test]
    fn claim_is_at_most_once_until_failure() {
        let mut s = SessionState::new();
        let dom = d("example.com");
        assert_eq!(s.claim(&dom), Claim::Claimed);
        assert!(s.has_seen(&dom));
        assert_eq!(s.claim(&dom), Claim::AlreadySeen(LookupState::InFlight));

        s.resolve(&dom);
        assert_eq!(s.claim(&dom), Claim::AlreadySeen(LookupState::Resolved));
    }

    #[test]
    fn seen_domains_include_failed_ones() {
        let mut s = SessionState::new();
        s.claim(&d("example.com"));
        s.resolve(&d("example.com"));
        s.claim(&d("flaky.example"));
        s.fail(&d("flaky.example"));
        let mut seen: Vec<&str> = s.seen_domains().map(RootDomain::as_str).collect();
        seen.sort_unstable();
        assert_eq!(seen, ["example.com", "flaky.example"]);
        assert_eq!(s.seen_count(), 2);
    }

    #[test]
    fn failed_domain_can_be_claimed_again() {
        let mut s = SessionState::new();
        let dom = d("flaky.example");
        assert_eq!(s.claim(&dom), Claim::Claimed);
        s.fail(&dom);
        assert_eq!(s.state(&dom), LookupState::Failed);
        assert!(s.has_seen(&dom));
        assert_eq!(s.claim(&dom), Claim::Claimed);
        assert_eq!(s.state(&dom), LookupState::InFlight);
    }

    #[test]
    fn navigation_only_moves_active_tab_domain() {
        let mut s = SessionState::new();
        assert!(s.set_active(1, Some(d("example.com"))));
        assert!(!s.record_navigation(2, d("other.org")));
        assert_eq!(s.current_root_domain(), Some(&d("example.com")));

        assert!(s.record_navigation(1, d("other.org")));
        assert!(!s.record_navigation(1, d("other.org")));
        assert_eq!(s.current_root_domain(), Some(&d("other.org")));
    }

    #[test]
    fn set_active_without_domain_clears_current() {
        let mut s = SessionState::new();
        s.set_active(1, Some(d("example.com")));
        assert!(s.set_active(2, None));
        assert_eq!(s.current_tab(), Some(2));
        assert!(s.current_root_domain().is_none());
    }
}
