//! `/ping` (alias `/latency`)
//!
//! - no argument: the invoker's own latency, or `player_only` from the console
//! - one argument: another session's latency, or `player_not_found`
//! - more: `usage`

use std::sync::Arc;

use everping_core::{render, ConfigStore, MessageKey, Result};

use super::{reply_or_fallback, CommandHandler};
use crate::{
    host::CommandSource,
    sessions::{SessionDirectory, SessionRef},
};

/// What a single `/ping` invocation is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandIntent {
    SelfQuery,
    OtherQuery { target: String },
    UsageError,
}

impl CommandIntent {
    /// Classify by argument count alone.
    pub fn classify(args: &[String]) -> Self {
        match args {
            [] => Self::SelfQuery,
            [target] => Self::OtherQuery {
                target: target.clone(),
            },
            _ => Self::UsageError,
        }
    }
}

/// Router for `/ping`.
#[derive(Debug, Clone)]
pub struct PingCommand {
    config: Arc<ConfigStore>,
    sessions: SessionDirectory,
}

impl PingCommand {
    pub const fn new(config: Arc<ConfigStore>, sessions: SessionDirectory) -> Self {
        Self { config, sessions }
    }

    /// Produce the reply for `args`, failing only if a template is missing.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is not loaded or lacks the template.
    pub async fn execute(&self, source: &dyn CommandSource, args: &[String]) -> Result<String> {
        match CommandIntent::classify(args) {
            CommandIntent::SelfQuery => {
                let own = source
                    .session()
                    .map(SessionRef::from)
                    .and_then(|session| self.sessions.current_metric(&session));
                match own {
                    Some(ping) => {
                        let template = self.config.get_message(MessageKey::OwnPing).await?;
                        Ok(render(&template, &[("ping", ping.to_string().as_str())]))
                    }
                    None => self.config.get_message(MessageKey::PlayerOnly).await,
                }
            }
            CommandIntent::OtherQuery { target } => {
                let found = self.sessions.find_by_name(&target).and_then(|session| {
                    self.sessions
                        .current_metric(&session)
                        .map(|ping| (session, ping))
                });
                match found {
                    Some((session, ping)) => {
                        let template = self.config.get_message(MessageKey::OtherPing).await?;
                        let (player, ping) = (session.name(), ping.to_string());
                        Ok(render(
                            &template,
                            &[("player", player.as_str()), ("ping", ping.as_str())],
                        ))
                    }
                    None => self.config.get_message(MessageKey::PlayerNotFound).await,
                }
            }
            CommandIntent::UsageError => self.config.get_message(MessageKey::Usage).await,
        }
    }
}

#[async_trait::async_trait]
impl CommandHandler for PingCommand {
    async fn handle(&self, source: &dyn CommandSource, args: &[String]) -> String {
        reply_or_fallback("ping", self.execute(source, args).await)
    }

    /// Every connected name, whatever has been typed. The partial token is
    /// not used as a prefix filter.
    fn suggest(&self, _source: &dyn CommandSource, _args: &[String]) -> Vec<String> {
        self.sessions.all_names().collect()
    }
}
