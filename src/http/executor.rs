use std::time::Duration;

use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

use crate::error::AppResult;

/// Hard per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_USER_AGENT: &str = concat!("hbench/", env!("CARGO_PKG_VERSION"));

/// Classified result of one request attempt. Elapsed wall-clock time is
/// carried only on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success { status: u16, elapsed: Duration },
    Failed { status: u16 },
    TransportError,
}

/// Build the shared client used for every request.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub(crate) fn build_client() -> AppResult<Client> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}

/// Issue one GET request. Never returns an error: transport failures
/// (connect refused, timeout, DNS, TLS) become `TransportError` outcomes.
pub(crate) async fn execute_request(client: &Client, url: &str) -> RequestOutcome {
    let start = Instant::now();
    match client.get(url).send().await {
        Ok(response) => classify(response.status().as_u16(), start.elapsed()),
        Err(err) => {
            debug!("Request to {} failed: {}", url, err);
            RequestOutcome::TransportError
        }
    }
}

/// Status buckets: 2xx/3xx success, 4xx/5xx failed (client and server
/// errors share the bucket), anything outside 100-599 counts as a
/// transport-level error by elimination.
pub(crate) const fn classify(status: u16, elapsed: Duration) -> RequestOutcome {
    match status {
        200..=399 => RequestOutcome::Success { status, elapsed },
        400..=599 => RequestOutcome::Failed { status },
        _ => RequestOutcome::TransportError,
    }
}
