//! Shared HTTP fetch helper with bounded retry.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

const RETRIES: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Retries exhausted fetching {url}")]
    RetriesExhausted { url: String },
}

/// GET a URL, retrying up to [`RETRIES`] times.
///
/// A 429 waits twice the normal delay before the next attempt; other
/// non-success statuses and transport errors wait the normal delay. The
/// last transport error is returned as-is.
pub(crate) async fn fetch_with_retry(client: &Client, url: &str) -> Result<Response, FetchError> {
    for attempt in 0..RETRIES {
        match client.get(url).send().await {
            Ok(response) if response.status().is_success() => return Ok(response),
            Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                tokio::time::sleep(RETRY_DELAY * 2).await;
                continue;
            }
            Ok(_) => {}
            Err(err) => {
                if attempt == RETRIES - 1 {
                    return Err(err.into());
                }
            }
        }
        tokio::time::sleep(RETRY_DELAY).await;
    }
    Err(FetchError::RetriesExhausted {
        url: url.to_string(),
    })
}
