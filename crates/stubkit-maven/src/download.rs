//! Document downloading from Maven repository mirrors.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use stubkit_util::errors::StubkitError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a shared reqwest client for repository access.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("stubkit/0.1")
        .build()
        .map_err(|e| {
            StubkitError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// Download raw bytes from a URL with a single GET, no retries.
///
/// Returns `Ok(None)` for 404 (document not present in this mirror); any
/// other failure is an error the caller treats as a per-mirror miss.
pub async fn download_bytes(client: &Client, url: &str) -> miette::Result<Option<Vec<u8>>> {
    debug!("GET {url}");

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| StubkitError::Network {
            message: format!("Request to {url} failed: {e}"),
        })?;

    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(StubkitError::Network {
            message: format!("HTTP {status} fetching {url}"),
        }
        .into());
    }

    let bytes = resp.bytes().await.map_err(|e| StubkitError::Network {
        message: format!("Failed to read response from {url}: {e}"),
    })?;
    Ok(Some(bytes.to_vec()))
}
