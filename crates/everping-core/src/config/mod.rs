//! Configuration loading and management
//!
//! # Lifecycle
//!
//! 1. Startup: [`ConfigStore::ensure_current`] fetches the canonical document
//!    if `config.yml` is missing or its `version` tag is not
//!    [`EXPECTED_VERSION`], then loads it.
//! 2. Every load runs the defaulting pass: message keys missing from the file
//!    get their hard-coded template and the merged file is saved back.
//! 3. Admin reload: [`ConfigStore::reload`] re-reads the file from disk only.
//!
//! # Example Config
//!
//! ```yaml
//! version: "1.0"
//! messages:
//!   own_ping: "&aIl tuo ping è di: &b{ping}ms"
//!   other_ping: "&aIl ping di &b{player} &aè di: &b{ping}ms"
//!   player_not_found: "&cIl giocatore specificato non è online o non esiste!"
//!   player_only: "&cSolo i giocatori possono usare questo comando!"
//!   usage: "&eUsa il comando nel modo corretto: &b/ping &eoppure &b/ping <giocatore>"
//! ```
//!
//! # Module Structure
//!
//! - `types`: Document wrapper and message keys
//! - `defaults`: Expected version, remote URL, fallback templates
//! - `load`: Reading and atomically writing the file
//! - `merge`: The defaulting pass
//! - `store`: Shared state machine with reload

// Module declarations
mod defaults;
mod load;
mod merge;
mod store;
mod types;


// Re-export public API
pub use defaults::{CONFIG_FILE_NAME, DEFAULT_CONFIG_URL, EXPECTED_VERSION};
pub use load::{config_path, read_config_file, write_config_file};
pub use store::{ConfigStore, FetchReason, LoadReport, StoreState, SyncReport};
pub use types::{Config, MessageKey, MESSAGES_KEY, VERSION_KEY};
