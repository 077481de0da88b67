//! Error types for EverPing with categorization:
//!
//! - **Fetch errors**: network or filesystem failure while syncing the remote config
//! - **Parse errors**: malformed on-disk configuration
//! - **Lookup errors**: missing message keys, nothing loaded yet
//! - **Access errors**: the administrative gate refused the caller
//!
//! Nothing in this crate terminates the host process; every failure is a
//! value the caller decides how to surface.

pub mod fetch;

use std::fmt;

pub use fetch::{ErrorClass, FetchError};

/// Top-level error type for the config and command subsystem.
#[derive(Debug, Clone)]
pub enum Error {
    /// Remote sync failed (network, timeout, or writing the fetched file)
    Fetch(FetchError),
    /// The configuration document could not be parsed
    Parse(String),
    /// A message key was absent after load
    MissingKey(String),
    /// The invoking source lacks the administrative capability
    PermissionDenied(String),
    /// Local filesystem failure outside of a fetch
    Io(String),
    /// Templates were requested before any configuration was loaded
    NotLoaded,
}

impl Error {
    /// Create a parse error.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an IO error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create a missing-key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey(key.into())
    }

    /// Create a permission-denied error for the named capability.
    pub fn permission_denied(capability: impl Into<String>) -> Self {
        Self::PermissionDenied(capability.into())
    }

    /// Whether this error came out of the remote fetch path.
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{err}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::MissingKey(key) => write!(f, "Missing message key: {key}"),
            Self::PermissionDenied(cap) => write!(f, "Permission denied: requires {cap}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::NotLoaded => write!(f, "Configuration has not been loaded"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse_error(format!("Failed to parse config: {err}"))
    }
}
