//! # EverPing
//!
//! Latency lookup (`/ping`, `/latency`) and admin (`/everping`, `/ep`)
//! commands for a proxy host.
//!
//! The host supplies its session registry and a command registrar as trait
//! objects (see [`host`]); [`EverPing::init`] syncs the configuration and
//! registers both routers.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//! - No handler failure may take down the host

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod commands;
pub mod host;
pub mod plugin;
pub mod sessions;

pub use commands::{AdminCommand, CommandHandler, CommandIntent, PingCommand};
pub use host::{CommandRegistrar, CommandSource, SessionHandle, SessionRegistry, ADMIN_CAPABILITY};
pub use plugin::EverPing;
pub use sessions::{Millis, SessionDirectory, SessionRef};
