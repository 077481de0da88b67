//! Remote config retrieval
//!
//! [`RemoteSource`] is the seam the config store pulls its canonical
//! document through. [`HttpFetcher`] is the production implementation:
//! a bounded-timeout GET with a single retry on transient failures, with
//! the body written to disk atomically so a failed fetch never replaces a
//! previously valid file.

use std::{path::Path, time::Duration};

use tracing::{debug, warn};

use crate::{
    atomic::{parent_dir, write_atomic_async},
    Error, FetchError, Result,
};

/// Default upper bound on a single fetch attempt.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of extra attempts after a retryable failure.
pub const DEFAULT_FETCH_RETRIES: u32 = 1;

/// Something that can copy a remote document to a local path.
#[async_trait::async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch `url` and atomically replace `destination` with its bytes.
    ///
    /// Missing parent directories of `destination` are created.
    async fn fetch(&self, url: &str, destination: &Path) -> std::result::Result<(), FetchError>;
}

/// HTTP(S) implementation of [`RemoteSource`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    retries: u32,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be constructed
    /// (for example when no TLS backend is available).
    pub fn new(timeout: Duration) -> Result<Self> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(|client| Self {
                client,
                retries: DEFAULT_FETCH_RETRIES,
            })
            .map_err(|e| Error::io_error(format!("Failed to build HTTP client: {e}")))
    }

    /// Override the number of retries after a transient failure.
    #[must_use]
    pub const fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|e| request_error(url, &e))
    }

    async fn download_with_retry(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.download(url).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && attempt < self.retries => {
                    attempt += 1;
                    warn!("Fetch of {url} failed ({e}), retrying ({attempt}/{})", self.retries);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait::async_trait]
impl RemoteSource for HttpFetcher {
    async fn fetch(&self, url: &str, destination: &Path) -> std::result::Result<(), FetchError> {
        let parent = parent_dir(destination);
        tokio::fs::create_dir_all(&parent)
            .await
            .map_err(|e| FetchError::CreateDir {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;

        let body = self.download_with_retry(url).await?;
        debug!("Fetched {} bytes from {url}", body.len());

        write_atomic_async(destination.to_path_buf(), body)
            .await
            .map_err(|e| FetchError::Write {
                path: destination.display().to_string(),
                reason: e.to_string(),
            })
    }
}

fn request_error(url: &str, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
