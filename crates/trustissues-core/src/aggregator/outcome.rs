//! Lookup outcome types.

use crate::domain::RootDomain;
use crate::error::LookupError;
use crate::reviews::Reviews;
use crate::service::{CreatedWebsite, Warning};

/// Everything learned about one domain. Each sub-call keeps its own result so
/// a failed review fetch never hides the warning (and vice versa).
#[derive(Debug, Clone, PartialEq)]
pub struct DomainReport {
    pub domain: RootDomain,
    /// Outcome of registering an unknown domain; `None` when the service
    /// already knew it or registration is disabled.
    pub registration: Option<Result<CreatedWebsite, LookupError>>,
    pub warning: Result<Option<Warning>, LookupError>,
    pub reviews: Result<Reviews, LookupError>,
}

impl DomainReport {
    pub fn warning(&self) -> Option<&Warning> {
        self.warning.as_ref().ok().and_then(Option::as_ref)
    }

    pub fn reviews(&self) -> &Reviews {
        static NONE: Reviews = Reviews::NoReviews;
        self.reviews.as_ref().unwrap_or(&NONE)
    }

    /// True when at least one sub-call failed.
    pub fn is_partial(&self) -> bool {
        self.warning.is_err() || self.reviews.is_err()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Host without a `.` (e.g. `localhost`); never sent to the service.
    NotLookupable(RootDomain),
    /// Already checked (or being checked) in this session; no remote call made.
    AlreadyChecked(RootDomain),
    Resolved(DomainReport),
    Failed {
        domain: RootDomain,
        error: LookupError,
    },
}

impl LookupOutcome {
    pub fn domain(&self) -> &RootDomain {
        match self {
            LookupOutcome::NotLookupable(d) | LookupOutcome::AlreadyChecked(d) => d,
            LookupOutcome::Resolved(r) => &r.domain,
            LookupOutcome::Failed { domain, .. } => domain,
        }
    }

    pub fn report(&self) -> Option<&DomainReport> {
        match self {
            LookupOutcome::Resolved(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LookupOutcome::Failed { .. })
    }

    /// Human-readable reason for a failed lookup.
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            LookupOutcome::Failed { error, .. } => Some(error.to_string()),
            _ => None,
        }
    }
}
