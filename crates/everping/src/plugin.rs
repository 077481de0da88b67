//! Plugin bootstrap
//!
//! Owns the shared [`ConfigStore`] and [`SessionDirectory`], runs the
//! startup sync, and registers both routers with the host.

use std::{path::Path, sync::Arc};

use everping_core::{ConfigStore, Result};
use tracing::{error, info};

use crate::{
    commands::{AdminCommand, PingCommand},
    host::{CommandRegistrar, SessionRegistry},
    sessions::SessionDirectory,
};

/// Verb and aliases for the latency command.
pub const PING_VERB: &str = "ping";
pub const PING_ALIASES: &[&str] = &["latency"];

/// Verb and aliases for the admin command.
pub const ADMIN_VERB: &str = "everping";
pub const ADMIN_ALIASES: &[&str] = &["ep"];

/// The assembled plugin.
#[derive(Debug, Clone)]
pub struct EverPing {
    config: Arc<ConfigStore>,
    sessions: SessionDirectory,
}

impl EverPing {
    pub fn new(config: ConfigStore, registry: Arc<dyn SessionRegistry>) -> Self {
        Self {
            config: Arc::new(config),
            sessions: SessionDirectory::new(registry),
        }
    }

    /// Build with an HTTP-backed store under `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn with_http(data_dir: &Path, registry: Arc<dyn SessionRegistry>) -> Result<Self> {
        Ok(Self::new(ConfigStore::with_http(data_dir)?, registry))
    }

    pub const fn config(&self) -> &Arc<ConfigStore> {
        &self.config
    }

    pub const fn sessions(&self) -> &SessionDirectory {
        &self.sessions
    }

    pub fn ping_command(&self) -> PingCommand {
        PingCommand::new(Arc::clone(&self.config), self.sessions.clone())
    }

    pub fn admin_command(&self) -> AdminCommand {
        AdminCommand::new(Arc::clone(&self.config))
    }

    /// Sync the configuration and register the commands.
    ///
    /// Sync failures are logged, never returned: when the remote cannot be
    /// reached but a file is already on disk, that file is loaded instead,
    /// and commands are registered either way.
    pub async fn init(&self, registrar: &mut dyn CommandRegistrar) {
        info!("EverPing enabled");
        self.sync_config().await;

        registrar.register(PING_VERB, PING_ALIASES, Arc::new(self.ping_command()));
        registrar.register(ADMIN_VERB, ADMIN_ALIASES, Arc::new(self.admin_command()));
    }

    /// Host notification that a session went away.
    pub fn on_disconnect(&self, name: &str) {
        info!("{name} disconnected");
    }

    async fn sync_config(&self) {
        match self.config.ensure_current().await {
            Ok(report) => {
                if let Some(reason) = report.fetched {
                    info!("Configuration fetched ({reason})");
                }
            }
            Err(e) => {
                error!("Failed to update configuration: {e}");
                let on_disk = tokio::fs::try_exists(self.config.path())
                    .await
                    .unwrap_or(false);
                if on_disk {
                    if let Err(e) = self.config.load().await {
                        error!("Failed to load configuration: {e}");
                    }
                }
            }
        }
    }
}
