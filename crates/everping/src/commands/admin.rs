//! `/everping` (alias `/ep`)
//!
//! Gated on [`ADMIN_CAPABILITY`]. The gate runs before any argument is
//! looked at, so unauthorized callers get the same denial for every input.

use std::sync::Arc;

use everping_core::{render, ConfigStore, Error, Result};
use tracing::{debug, warn};

use super::CommandHandler;
use crate::host::{CommandSource, ADMIN_CAPABILITY};

pub const PERMISSION_DENIED: &str = "&cNon hai il permesso di utilizzare questo comando!";

pub const HELP: &str = "&cComandi Disponibili:\n\
                        &b/everping reload &7- &fRicarica le Configurazioni\n\
                        &b/everping help &7- &fMostra questo messaggio\n\
                        &b/ping &7- &fMostra la tua latenza";

pub const UNKNOWN_COMMAND: &str = "&cComando sconosciuto! Usa &b/everping help";

pub const RELOAD_OK: &str = "&aConfigurazione ricaricata con successo!";

/// Reload failure; `{error}` receives the error text.
pub const RELOAD_FAILED: &str = "&cImpossibile ricaricare la configurazione: &f{error}";

const SUBCOMMANDS: [&str; 2] = ["reload", "help"];

/// Parsed first token of an `/everping` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminSubcommand {
    Reload,
    Help,
    Unknown(String),
}

impl AdminSubcommand {
    /// Match the first token case-insensitively; no token means help.
    pub fn parse(args: &[String]) -> Self {
        match args.first().map(|token| token.to_lowercase()).as_deref() {
            None | Some("help") => Self::Help,
            Some("reload") => Self::Reload,
            Some(other) => Self::Unknown(other.to_string()),
        }
    }
}

/// Router for `/everping`.
#[derive(Debug, Clone)]
pub struct AdminCommand {
    config: Arc<ConfigStore>,
}

impl AdminCommand {
    pub const fn new(config: Arc<ConfigStore>) -> Self {
        Self { config }
    }

    /// Check the admin capability.
    ///
    /// # Errors
    ///
    /// Returns `Error::PermissionDenied` if the source lacks it.
    pub fn authorize(source: &dyn CommandSource) -> Result<()> {
        if source.has_capability(ADMIN_CAPABILITY) {
            Ok(())
        } else {
            Err(Error::permission_denied(ADMIN_CAPABILITY))
        }
    }

    async fn reload(&self) -> String {
        match self.config.reload().await {
            Ok(report) => {
                debug!("Reload patched {} key(s)", report.patched.len());
                RELOAD_OK.to_string()
            }
            Err(e) => {
                warn!("Reload failed, keeping previous configuration: {e}");
                render(RELOAD_FAILED, &[("error", e.to_string().as_str())])
            }
        }
    }
}

#[async_trait::async_trait]
impl CommandHandler for AdminCommand {
    async fn handle(&self, source: &dyn CommandSource, args: &[String]) -> String {
        if Self::authorize(source).is_err() {
            return PERMISSION_DENIED.to_string();
        }

        match AdminSubcommand::parse(args) {
            AdminSubcommand::Reload => self.reload().await,
            AdminSubcommand::Help => HELP.to_string(),
            AdminSubcommand::Unknown(_) => UNKNOWN_COMMAND.to_string(),
        }
    }

    fn suggest(&self, source: &dyn CommandSource, args: &[String]) -> Vec<String> {
        if Self::authorize(source).is_err() {
            return Vec::new();
        }

        match args {
            [partial] => {
                let partial = partial.to_lowercase();
                SUBCOMMANDS
                    .iter()
                    .filter(|name| name.starts_with(&partial))
                    .map(ToString::to_string)
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}
