//! Timeout wrapper for upstream calls.

use crate::RegistryError;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Bound an upstream call. Elapsing the limit is a transport failure.
pub async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T, RegistryError>
where
    F: Future<Output = Result<T, RegistryError>>,
{
    match timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(RegistryError::Transport(format!(
            "request timed out after {limit:?}"
        ))),
    }
}
