//! Lookup error taxonomy and classification of curl / HTTP failures.

use crate::domain::DomainError;

/// Error produced by a single remote call or a whole lookup.
///
/// Every variant renders as a human-readable reason suitable for the
/// "proceed with caution" fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// Connection, DNS, or other transport failure.
    #[error("network error: {0}")]
    Network(String),
    /// The call did not complete within its time bound.
    #[error("request timed out")]
    Timeout,
    /// Non-2xx response; `detail` comes from a `{"detail": ...}` body if present.
    #[error("{}", remote_message(*status, detail.as_deref()))]
    Remote { status: u32, detail: Option<String> },
    /// 2xx response whose body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

fn remote_message(status: u32, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("service returned HTTP {status}: {d}"),
        None => format!("service returned HTTP {status}"),
    }
}

impl From<DomainError> for LookupError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidUrl(u) => LookupError::InvalidUrl(u),
        }
    }
}

impl From<curl::Error> for LookupError {
    fn from(e: curl::Error) -> Self {
        classify_curl_error(&e)
    }
}

/// Map a curl error onto the taxonomy: timeouts are kept apart, every other
/// curl failure (connect, DNS, TLS, reset) is a transport failure.
pub fn classify_curl_error(e: &curl::Error) -> LookupError {
    if e.is_operation_timedout() {
        return LookupError::Timeout;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return LookupError::Network(format!("could not resolve host: {}", e.description()));
    }
    if e.is_couldnt_connect() {
        return LookupError::Network(format!("could not connect: {}", e.description()));
    }
    LookupError::Network(e.to_string())
}

/// Build a `Remote` error from a non-2xx status and its raw body.
pub fn classify_http_status(status: u32, body: &[u8]) -> LookupError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| match b.detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });
    LookupError::Remote { status, detail }
}

impl LookupError {
    /// True for failures that say nothing about the domain itself
    /// (transport problems rather than a service answer).
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Network(_) | LookupError::Timeout)
    }
}
