//! Run a blocking service call on the blocking pool, bounded by a timeout.

use std::sync::Arc;
use std::time::Duration;

use crate::error::LookupError;
use crate::service::WarningService;

/// Runs `f` against `service` via `spawn_blocking`. An elapsed `timeout`
/// resolves to [`LookupError::Timeout`]; the blocking call itself is left to
/// finish in the background (curl carries its own timeout).
pub(crate) async fn call<S, T, F>(
    service: &Arc<S>,
    timeout: Duration,
    what: &'static str,
    f: F,
) -> Result<T, LookupError>
where
    S: WarningService + ?Sized + 'static,
    T: Send + 'static,
    F: FnOnce(&S) -> Result<T, LookupError> + Send + 'static,
{
    let service = Arc::clone(service);
    let task = tokio::task::spawn_blocking(move || f(&*service));
    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => {
            if let Err(e) = &result {
                tracing::debug!(call = what, error = %e, "service call failed");
            }
            result
        }
        Ok(Err(join_err)) => Err(LookupError::Network(format!(
            "{what} task failed: {join_err}"
        ))),
        Err(_) => {
            tracing::warn!(
                call = what,
                timeout_ms = timeout.as_millis() as u64,
                "service call timed out"
            );
            Err(LookupError::Timeout)
        }
    }
}
