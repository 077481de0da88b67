//! The narrow surface EverPing consumes from the proxy host.
//!
//! The host owns sessions, transport, permissions and text rendering. It
//! hands EverPing plain trait objects at startup; nothing here reaches into
//! host internals.

use std::sync::Arc;

use crate::commands::CommandHandler;

/// Capability required for the `everping` admin command.
pub const ADMIN_CAPABILITY: &str = "everping.admin";

/// One connected user's live connection, as the host exposes it.
pub trait SessionHandle: Send + Sync {
    /// Display name, unique among currently connected sessions.
    fn username(&self) -> String;

    /// Latest round-trip latency in milliseconds. May be approximate.
    fn current_latency(&self) -> u64;

    /// Whether the connection is still up.
    fn is_live(&self) -> bool;
}

/// The host's registry of connected sessions.
pub trait SessionRegistry: Send + Sync {
    /// Look up a connected session by display name.
    fn find_session_by_name(&self, name: &str) -> Option<Arc<dyn SessionHandle>>;

    /// Names of every currently connected session.
    fn list_all_session_names(&self) -> Vec<String>;
}

/// Whoever invoked a command: a connected session or the console.
pub trait CommandSource: Send + Sync {
    /// The invoker's own session, if the invoker is a connected user.
    fn session(&self) -> Option<Arc<dyn SessionHandle>>;

    /// Whether the invoker holds `capability`.
    fn has_capability(&self, capability: &str) -> bool;
}

/// Command registration on the host.
pub trait CommandRegistrar {
    /// Bind `verb` and its `aliases` to `handler`.
    fn register(&mut self, verb: &str, aliases: &[&str], handler: Arc<dyn CommandHandler>);
}
