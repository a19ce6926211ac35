//! Warning aggregation for a resolved root domain.
//!
//! The aggregator owns the session's seen-domain map and a handle to the
//! warning service. A lookup claims the domain, checks that the service
//! knows it (registering it otherwise), then fetches warning and reviews
//! concurrently and merges them into one [`LookupOutcome`]. Remote errors
//! never escape: they end up inside the outcome.

mod call;
mod guard;
mod outcome;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::TrustConfig;
use crate::domain::{resolve_root_domain, RootDomain};
use crate::error::LookupError;
use crate::service::WarningService;
use crate::session::{Claim, LookupState, SessionState};

use call::call;
use guard::{lock, ClaimGuard};

pub use outcome::{DomainReport, LookupOutcome};

/// Tunables for [`Aggregator`].
#[derive(Debug, Clone, Copy)]
pub struct AggregatorOptions {
    /// Bound on each remote call.
    pub request_timeout: Duration,
    /// POST domains the service does not know yet.
    pub register_unknown: bool,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self::from(&TrustConfig::default())
    }
}

impl From<&TrustConfig> for AggregatorOptions {
    fn from(cfg: &TrustConfig) -> Self {
        Self {
            request_timeout: cfg.request_timeout(),
            register_unknown: cfg.register_unknown,
        }
    }
}

pub struct Aggregator<S: WarningService + ?Sized + 'static> {
    service: Arc<S>,
    session: Mutex<SessionState>,
    opts: AggregatorOptions,
}

impl<S: WarningService + ?Sized + 'static> Aggregator<S> {
    /// New aggregator with a fresh session.
    pub fn new(service: Arc<S>, opts: AggregatorOptions) -> Self {
        Self {
            service,
            session: Mutex::new(SessionState::new()),
            opts,
        }
    }

    /// Lifecycle state of `domain` in this session.
    pub async fn state(&self, domain: &RootDomain) -> LookupState {
        lock(&self.session).state(domain)
    }

    /// Run `f` with exclusive access to the session.
    pub async fn with_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut lock(&self.session))
    }

    /// Resolve `url` to its root domain and look it up.
    pub async fn lookup_url(&self, url: &str) -> Result<LookupOutcome, LookupError> {
        let domain = resolve_root_domain(url)?;
        Ok(self.lookup(&domain).await)
    }

    /// Look up warnings and reviews for `domain`, at most once per session
    /// unless the previous attempt failed.
    pub async fn lookup(&self, domain: &RootDomain) -> LookupOutcome {
        if !domain.is_lookupable() {
            tracing::debug!(%domain, "skipping lookup for host without a dot");
            return LookupOutcome::NotLookupable(domain.clone());
        }

        // Claim under the same lock acquisition as the check so concurrent
        // lookups of one domain cannot both reach the service.
        let claim = lock(&self.session).claim(domain);
        if let Claim::AlreadySeen(state) = claim {
            tracing::debug!(%domain, ?state, "domain already checked this session");
            return LookupOutcome::AlreadyChecked(domain.clone());
        }
        let guard = ClaimGuard::new(&self.session, domain);

        tracing::info!(%domain, "looking up trust warnings");
        match self.fetch(domain).await {
            Ok(report) => {
                guard.resolve();
                if report.is_partial() {
                    tracing::warn!(%domain, "lookup resolved with partial data");
                }
                LookupOutcome::Resolved(report)
            }
            Err(error) => {
                guard.fail();
                tracing::warn!(%domain, %error, "lookup failed");
                LookupOutcome::Failed {
                    domain: domain.clone(),
                    error,
                }
            }
        }
    }

    async fn fetch(&self, domain: &RootDomain) -> Result<DomainReport, LookupError> {
        let timeout = self.opts.request_timeout;
        let name = domain.as_str().to_string();

        let exists = {
            let name = name.clone();
            call(&self.service, timeout, "check_root_url", move |s| {
                s.check_root_url(&name)
            })
            .await?
        };

        let registration = if !exists && self.opts.register_unknown {
            let name = name.clone();
            let created = call(&self.service, timeout, "add_website", move |s| {
                s.add_website(&name)
            })
            .await;
            match &created {
                Ok(c) => tracing::info!(%domain, id = ?c.id, "registered unknown domain"),
                Err(e) => tracing::warn!(%domain, error = %e, "registering unknown domain failed"),
            }
            Some(created)
        } else {
            None
        };

        let warning_name = name.clone();
        let (warning, reviews) = tokio::join!(
            call(&self.service, timeout, "get_warning", move |s| {
                s.get_warning(&warning_name)
            }),
            call(&self.service, timeout, "get_reviews", move |s| {
                s.get_reviews(&name)
            }),
        );

        if let (Err(warning_err), Err(reviews_err)) = (&warning, &reviews) {
            tracing::debug!(%domain, %reviews_err, "reviews also failed");
            return Err(warning_err.clone());
        }

        Ok(DomainReport {
            domain: domain.clone(),
            registration,
            warning,
            reviews,
        })
    }
}
