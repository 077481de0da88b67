//! Errors raised while pulling the canonical config from its remote source.
//!
//! Each variant knows whether a second attempt could plausibly succeed, so
//! the fetcher can retry network hiccups without retrying a full disk.

use thiserror::Error;

/// Classification of fetch errors for retry decision-making.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Error is transient and can be retried.
    Retryable,
    /// Error is permanent and should not be retried.
    Terminal,
}

/// Errors that can occur while fetching and storing the remote config.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The destination's parent directory could not be created.
    #[error("cannot create directory {path}: {reason}")]
    CreateDir { path: String, reason: String },

    /// The remote resource could not be opened.
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The remote answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The request did not finish within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The fetched bytes could not be written to disk.
    #[error("cannot write {path}: {reason}")]
    Write { path: String, reason: String },
}

impl FetchError {
    /// Classify the error as retryable or terminal.
    #[must_use]
    pub const fn classify(&self) -> ErrorClass {
        match self {
            Self::Request { .. } | Self::Timeout { .. } => ErrorClass::Retryable,
            Self::Status { status, .. } if *status >= 500 => ErrorClass::Retryable,
            Self::Status { .. } | Self::CreateDir { .. } | Self::Write { .. } => {
                ErrorClass::Terminal
            }
        }
    }

    /// Check if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.classify(), ErrorClass::Retryable)
    }
}
