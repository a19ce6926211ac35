//! Decode service response bodies.

use serde::Deserialize;

use super::{CreatedWebsite, Warning};
use crate::error::LookupError;

fn malformed(what: &str, e: serde_json::Error) -> LookupError {
    LookupError::MalformedResponse(format!("{what}: {e}"))
}

/// `{"exists": bool}`
pub fn parse_exists(body: &[u8]) -> Result<bool, LookupError> {
    #[derive(Deserialize)]
    struct Exists {
        exists: bool,
    }
    let parsed: Exists = serde_json::from_slice(body).map_err(|e| malformed("check_root_url", e))?;
    Ok(parsed.exists)
}

/// `{"message": ..., "extended_message": ...}`; `null` means no warning.
pub fn parse_warning(body: &[u8]) -> Result<Option<Warning>, LookupError> {
    let parsed: Option<Warning> =
        serde_json::from_slice(body).map_err(|e| malformed("get_warning", e))?;
    Ok(parsed.filter(|w| !w.message.trim().is_empty() || !w.extended_message.trim().is_empty()))
}

/// Created resource. A `{"detail": ...}` body on a 2xx is still an error.
pub fn parse_created(status: u32, body: &[u8]) -> Result<CreatedWebsite, LookupError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| malformed("add_website", e))?;
    if let Some(detail) = value.get("detail") {
        let detail = match detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(LookupError::Remote {
            status,
            detail: Some(detail),
        });
    }
    let id = ["id", "_id", "inserted_id"]
        .iter()
        .find_map(|k| value.get(*k))
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    Ok(CreatedWebsite { id, body: value })
}
