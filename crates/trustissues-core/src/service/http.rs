//! libcurl implementation of [`WarningService`].

use std::time::Duration;

use anyhow::Result;
use curl::easy::{Easy, List};

use super::endpoint::Endpoints;
use super::parse::{parse_created, parse_exists, parse_warning};
use super::{CreatedWebsite, Warning, WarningService};
use crate::config::TrustConfig;
use crate::error::{classify_http_status, LookupError};
use crate::reviews::{parse_reviews_body, Reviews};

/// Status code and body of a completed transfer.
struct Response {
    code: u32,
    body: Vec<u8>,
}

impl Response {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Blocking HTTP client for the warning service.
///
/// Each call builds a fresh curl handle; call from `spawn_blocking` when used
/// from async code.
#[derive(Debug, Clone)]
pub struct HttpWarningService {
    endpoints: Endpoints,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpWarningService {
    pub fn new(cfg: &TrustConfig) -> Result<Self> {
        Ok(Self {
            endpoints: Endpoints::new(&cfg.base_url, cfg.creation_endpoint)?,
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
        })
    }

    fn handle(&self, url: &str) -> Result<Easy, LookupError> {
        let mut easy = Easy::new();
        easy.url(url)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        let mut headers = List::new();
        headers.append("Accept: application/json")?;
        easy.http_headers(headers)?;
        Ok(easy)
    }

    fn perform(&self, mut easy: Easy) -> Result<Response, LookupError> {
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let code = easy.response_code()?;
        Ok(Response { code, body })
    }

    fn get(&self, url: &str) -> Result<Response, LookupError> {
        tracing::debug!(url, "GET");
        let mut easy = self.handle(url)?;
        // POSTs never follow: curl would downgrade a 301/302 to a bodiless GET.
        easy.follow_location(true)?;
        let resp = self.perform(easy)?;
        tracing::debug!(url, status = resp.code, bytes = resp.body.len(), "GET done");
        Ok(resp)
    }

    fn post_json(&self, url: &str, payload: &serde_json::Value) -> Result<Response, LookupError> {
        tracing::debug!(url, "POST");
        let mut easy = self.handle(url)?;
        let mut headers = List::new();
        headers.append("Accept: application/json")?;
        headers.append("Content-Type: application/json")?;
        easy.http_headers(headers)?;
        easy.post(true)?;
        easy.post_fields_copy(payload.to_string().as_bytes())?;
        let resp = self.perform(easy)?;
        tracing::debug!(url, status = resp.code, "POST done");
        Ok(resp)
    }
}

impl WarningService for HttpWarningService {
    fn check_root_url(&self, domain: &str) -> Result<bool, LookupError> {
        let resp = self.get(&self.endpoints.check_root_url(domain))?;
        if !resp.is_success() {
            return Err(classify_http_status(resp.code, &resp.body));
        }
        parse_exists(&resp.body)
    }

    fn get_warning(&self, domain: &str) -> Result<Option<Warning>, LookupError> {
        let resp = self.get(&self.endpoints.get_warning(domain))?;
        if resp.is_not_found() {
            return Ok(None);
        }
        if !resp.is_success() {
            return Err(classify_http_status(resp.code, &resp.body));
        }
        parse_warning(&resp.body)
    }

    fn get_reviews(&self, domain: &str) -> Result<Reviews, LookupError> {
        let resp = self.get(&self.endpoints.get_reviews(domain))?;
        if resp.is_not_found() {
            return Ok(Reviews::NoReviews);
        }
        if !resp.is_success() {
            return Err(classify_http_status(resp.code, &resp.body));
        }
        parse_reviews_body(&resp.body)
    }

    fn add_website(&self, domain: &str) -> Result<CreatedWebsite, LookupError> {
        let payload = serde_json::json!({ "website": domain });
        let resp = self.post_json(&self.endpoints.create(), &payload)?;
        if !resp.is_success() {
            return Err(classify_http_status(resp.code, &resp.body));
        }
        parse_created(resp.code, &resp.body)
    }
}
