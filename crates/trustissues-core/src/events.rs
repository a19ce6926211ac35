//! Host tab events: "active tab changed" and "tab navigated".

use std::collections::HashMap;

use crate::aggregator::{Aggregator, LookupOutcome};
use crate::domain::{resolve_root_domain, RootDomain};
use crate::service::WarningService;
use crate::session::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The user switched to `tab_id`; its URL comes from a [`TabDirectory`].
    TabActivated { tab_id: TabId },
    /// `tab_id` navigated to `url`.
    TabNavigated { tab_id: TabId, url: String },
}

/// Host-side lookup of a tab's current URL.
pub trait TabDirectory {
    fn url_of(&self, tab: TabId) -> Option<String>;
}

impl TabDirectory for HashMap<TabId, String> {
    fn url_of(&self, tab: TabId) -> Option<String> {
        self.get(&tab).cloned()
    }
}

fn root_of(url: &str) -> Option<RootDomain> {
    match resolve_root_domain(url) {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::warn!(url, error = %e, "ignoring tab with unresolvable URL");
            None
        }
    }
}

/// Update the session for `event` and look up the resulting root domain.
///
/// Returns `None` when the event yields no resolvable domain. Navigations in
/// background tabs are looked up too, but only the active tab moves the
/// session's current root domain.
pub async fn handle_event<S, T>(
    agg: &Aggregator<S>,
    tabs: &T,
    event: HostEvent,
) -> Option<LookupOutcome>
where
    S: WarningService + ?Sized + 'static,
    T: TabDirectory + ?Sized,
{
    let domain = match event {
        HostEvent::TabActivated { tab_id } => {
            let domain = tabs.url_of(tab_id).as_deref().and_then(root_of);
            agg.with_session(|s| s.set_active(tab_id, domain.clone()))
                .await;
            tracing::debug!(tab_id, domain = ?domain, "tab activated");
            domain?
        }
        HostEvent::TabNavigated { tab_id, url } => {
            let domain = root_of(&url)?;
            let moved = agg
                .with_session(|s| s.record_navigation(tab_id, domain.clone()))
                .await;
            tracing::debug!(tab_id, %domain, active_changed = moved, "tab navigated");
            domain
        }
    };
    Some(agg.lookup(&domain).await)
}
