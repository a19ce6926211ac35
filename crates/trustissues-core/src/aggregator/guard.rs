//! RAII guard over a claimed domain.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::RootDomain;
use crate::session::SessionState;

/// Locks the session, recovering the data from a poisoned lock.
pub(super) fn lock(session: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns an `InFlight` claim. Dropping it unsettled (the lookup future was
/// cancelled) marks the domain `Failed` so it can be claimed again.
pub(super) struct ClaimGuard<'a> {
    session: &'a Mutex<SessionState>,
    domain: &'a RootDomain,
    settled: bool,
}

impl<'a> ClaimGuard<'a> {
    pub(super) fn new(session: &'a Mutex<SessionState>, domain: &'a RootDomain) -> Self {
        Self {
            session,
            domain,
            settled: false,
        }
    }

    pub(super) fn resolve(mut self) {
        lock(self.session).resolve(self.domain);
        self.settled = true;
    }

    pub(super) fn fail(mut self) {
        lock(self.session).fail(self.domain);
        self.settled = true;
    }
}

impl Drop for ClaimGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!(domain = %self.domain, "lookup abandoned before finishing");
            lock(self.session).fail(self.domain);
        }
    }
}
