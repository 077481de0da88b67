//! Command handlers handed to the host at startup.
//!
//! Each router implements [`CommandHandler`]: `handle` turns one invocation
//! into the text to send back, `suggest` answers tab-completion. Routers
//! never fail outward; a missing configuration costs one invocation a
//! fallback line and a log entry.

mod admin;
mod ping;

use everping_core::Result;
use tracing::warn;

pub use admin::{
    AdminCommand, AdminSubcommand, HELP, PERMISSION_DENIED, RELOAD_FAILED, RELOAD_OK,
    UNKNOWN_COMMAND,
};
pub use ping::{CommandIntent, PingCommand};

use crate::host::CommandSource;

/// Sent when no template could be produced for an invocation.
pub const UNAVAILABLE: &str = "&cEverPing non è disponibile: configurazione non caricata.";

/// A command entry point registered with the host.
#[async_trait::async_trait]
pub trait CommandHandler: Send + Sync {
    /// Run one invocation and return the rendered reply.
    async fn handle(&self, source: &dyn CommandSource, args: &[String]) -> String;

    /// Tab-completion candidates for the arguments typed so far.
    fn suggest(&self, source: &dyn CommandSource, args: &[String]) -> Vec<String>;
}

/// Collapse a router result into reply text.
fn reply_or_fallback(command: &str, result: Result<String>) -> String {
    result.unwrap_or_else(|e| {
        warn!("/{command} could not be answered: {e}");
        UNAVAILABLE.to_string()
    })
}
