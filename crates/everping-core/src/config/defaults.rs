//! Default configuration values
//!
//! Hard-coded fallbacks used by the defaulting pass. They mirror the remote
//! canonical document so a self-healed file reads the same as a fresh one.

use serde_yaml::{Mapping, Value};
use strum::IntoEnumIterator;

use super::types::{Config, MessageKey, MESSAGES_KEY, VERSION_KEY};

/// Version tag this build expects; anything else triggers a remote re-fetch.
pub const EXPECTED_VERSION: &str = "1.0";

/// Where the canonical configuration document lives.
pub const DEFAULT_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/Salmone30/Congig/main/config.yml";

/// File name of the configuration inside the plugin data directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

impl MessageKey {
    /// Fallback template inserted when the key is missing from the file.
    pub const fn default_template(self) -> &'static str {
        match self {
            Self::OwnPing => "&aIl tuo ping è di: &b{ping}ms",
            Self::OtherPing => "&aIl ping di &b{player} &aè di: &b{ping}ms",
            Self::PlayerNotFound => "&cIl giocatore specificato non è online o non esiste!",
            Self::PlayerOnly => "&cSolo i giocatori possono usare questo comando!",
            Self::Usage => {
                "&eUsa il comando nel modo corretto: &b/ping &eoppure &b/ping <giocatore>"
            }
        }
    }
}

impl Default for Config {
    /// The complete seeded document: current version plus every template.
    fn default() -> Self {
        let messages: Mapping = MessageKey::iter()
            .map(|key| {
                (
                    Value::from(key.as_str()),
                    Value::from(key.default_template()),
                )
            })
            .collect();

        let mut doc = Mapping::new();
        doc.insert(Value::from(VERSION_KEY), Value::from(EXPECTED_VERSION));
        doc.insert(Value::from(MESSAGES_KEY), Value::Mapping(messages));
        Self::from_mapping(doc)
    }
}
