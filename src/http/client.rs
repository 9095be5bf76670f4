use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::HttpError;
use crate::metrics::Outcome;

/// Performs one GET and maps the result to an [`Outcome`].
///
/// Implementations never fail: anything that prevents a status code from
/// being read is reported as [`Outcome::TRANSPORT_FAILURE`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Outcome;
}

/// [`Fetcher`] backed by a shared `reqwest` client with default settings.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client with the transport defaults (no request timeout).
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or resolver cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .build()
            .map_err(|source| HttpError::BuildClientFailed { source })?;
        Ok(Self::from_client(client))
    }

    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Outcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                let outcome = Outcome::from(response.status());
                // The status is already known; a broken body does not change it.
                if let Err(err) = response.bytes().await {
                    debug!("Failed to read response body from {}: {}", url, err);
                }
                outcome
            }
            Err(err) => {
                debug!("Request to {} failed: {}", url, err);
                Outcome::TRANSPORT_FAILURE
            }
        }
    }
}
