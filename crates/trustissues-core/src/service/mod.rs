//! Client for the remote warning service.
//!
//! [`WarningService`] is the seam the aggregator depends on; the production
//! implementation is [`HttpWarningService`] (libcurl). Calls are blocking;
//! the aggregator runs them on the blocking pool.

mod endpoint;
mod http;
mod parse;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::reviews::Reviews;

pub use endpoint::Endpoints;
pub use http::HttpWarningService;
pub use parse::{parse_created, parse_exists, parse_warning};

/// Warning text on record for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub message: String,
    #[serde(default)]
    pub extended_message: String,
}

/// Result of registering a domain with the service.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedWebsite {
    /// Identifier of the created resource, when the service returns one.
    pub id: Option<String>,
    /// Full response body.
    pub body: serde_json::Value,
}

/// Operations offered by the warning service, keyed by root domain.
pub trait WarningService: Send + Sync {
    /// `GET /check_root_url/{domain}`: whether the service knows the domain.
    fn check_root_url(&self, domain: &str) -> Result<bool, LookupError>;

    /// `GET /get_warning/{domain}`: `Ok(None)` when nothing is on record.
    fn get_warning(&self, domain: &str) -> Result<Option<Warning>, LookupError>;

    /// `GET /get_reviews/{domain}`, normalized.
    fn get_reviews(&self, domain: &str) -> Result<Reviews, LookupError>;

    /// `POST /add_website` (or `/websites`) with `{"website": domain}`.
    fn add_website(&self, domain: &str) -> Result<CreatedWebsite, LookupError>;
}
