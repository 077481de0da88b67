//! # EverPing Core
//!
//! Remote-synced, self-healing configuration and template rendering for the
//! EverPing latency commands.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. Nothing here may bring
//! down the host process; failures are values for the caller to report.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod atomic;
pub mod config;
mod error;
pub mod fetch;
pub mod template;

pub use config::{Config, ConfigStore, LoadReport, MessageKey, StoreState, SyncReport};
pub use error::{Error, ErrorClass, FetchError};
pub use fetch::{HttpFetcher, RemoteSource};
pub use template::render;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
