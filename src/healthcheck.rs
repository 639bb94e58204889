use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// How long the probe waits for the liveness endpoint.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Reasons a health probe can fail.
#[derive(Debug, Error)]
pub enum HealthCheckError {
    #[error("health check request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("health check returned status {0}")]
    UnexpectedStatus(StatusCode),
}

/// Issue a single GET against `url` and require a `200 OK` answer.
pub async fn probe(url: &str) -> Result<(), HealthCheckError> {
    let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(HealthCheckError::UnexpectedStatus(status));
    }

    Ok(())
}
