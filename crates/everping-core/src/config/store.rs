//! Shared, reloadable configuration
//!
//! [`ConfigStore`] owns the one configuration instance for the process. It
//! moves through `Uninitialized → Syncing → Loaded`:
//!
//! - [`ConfigStore::ensure_current`] runs once at startup: fetch the remote
//!   document when the file is absent or its version tag is stale, then load.
//! - [`ConfigStore::load`] / [`ConfigStore::reload`] re-read the file from
//!   disk, patch in missing message keys, and persist if anything changed.
//!
//! Readers get an `Arc<Config>` snapshot under a read lock, and loads swap a
//! fully-built replacement in under the write lock, so nobody ever observes
//! a half-merged document. Disk work is serialized by a separate mutex so
//! concurrent reloads produce exactly one merged write.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use super::{
    defaults::DEFAULT_CONFIG_URL,
    load::{config_path, read_config_file, write_config_file},
    types::{Config, MessageKey},
};
use crate::{
    fetch::{HttpFetcher, RemoteSource, DEFAULT_FETCH_TIMEOUT},
    Error, Result,
};

/// Lifecycle of the store's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Nothing has been loaded yet
    Uninitialized,
    /// A startup sync is in progress
    Syncing,
    /// A configuration is available to readers
    Loaded,
}

/// Why a startup sync went to the remote source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchReason {
    /// No configuration file existed yet
    Missing,
    /// The file's version tag was absent or different
    Stale { found: Option<String> },
}

impl fmt::Display for FetchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no configuration file"),
            Self::Stale { found: Some(v) } => write!(f, "stale version {v}"),
            Self::Stale { found: None } => write!(f, "no version tag"),
        }
    }
}

/// Outcome of a single load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Message keys that were missing and got their default inserted
    pub patched: Vec<MessageKey>,
    /// Whether the merged document was written back to disk
    pub persisted: bool,
}

/// Outcome of a startup sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Set when the remote document was fetched, with the reason
    pub fetched: Option<FetchReason>,
    /// The load that followed
    pub load: LoadReport,
}

struct StoreInner {
    state: StoreState,
    config: Option<Arc<Config>>,
}

/// Owner of the process-wide configuration.
pub struct ConfigStore {
    path: PathBuf,
    url: String,
    source: Arc<dyn RemoteSource>,
    inner: RwLock<StoreInner>,
    disk: Mutex<()>,
}

impl ConfigStore {
    /// Create a store for `<data_dir>/config.yml` syncing from the default URL.
    pub fn new(data_dir: &Path, source: Arc<dyn RemoteSource>) -> Self {
        Self {
            path: config_path(data_dir),
            url: DEFAULT_CONFIG_URL.to_string(),
            source,
            inner: RwLock::new(StoreInner {
                state: StoreState::Uninitialized,
                config: None,
            }),
            disk: Mutex::new(()),
        }
    }

    /// Create a store that fetches over HTTP with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn with_http(data_dir: &Path) -> Result<Self> {
        let fetcher = HttpFetcher::new(DEFAULT_FETCH_TIMEOUT)?;
        Ok(Self::new(data_dir, Arc::new(fetcher)))
    }

    /// Sync from a different remote URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remote URL used by [`Self::ensure_current`].
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> StoreState {
        self.inner.read().await.state
    }

    /// Current configuration, if any has been loaded.
    pub async fn snapshot(&self) -> Option<Arc<Config>> {
        self.inner.read().await.config.clone()
    }

    /// Version tag of the loaded configuration.
    pub async fn version(&self) -> Option<String> {
        self.snapshot().await.and_then(|config| config.version())
    }

    /// Template for `key` from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotLoaded` before the first successful load, or
    /// `Error::MissingKey` if the key is absent.
    pub async fn get_message(&self, key: MessageKey) -> Result<String> {
        let inner = self.inner.read().await;
        inner
            .config
            .as_ref()
            .ok_or(Error::NotLoaded)
            .and_then(|config| config.get_message(key))
    }

    /// Make sure the on-disk configuration exists and is current, then load it.
    ///
    /// # Errors
    ///
    /// Returns error if the existing file cannot be parsed, the remote fetch
    /// fails, or the subsequent load fails. The previously loaded
    /// configuration, if any, stays in place.
    ///
    /// The disk lock is held across the remote fetch, so a [`Self::reload`]
    /// issued meanwhile waits for the sync to finish. With the HTTP source
    /// that wait is bounded by the request timeout times the attempt count.
    pub async fn ensure_current(&self) -> Result<SyncReport> {
        let _disk = self.disk.lock().await;
        self.set_state(StoreState::Syncing).await;

        let result = self.sync_locked().await;
        if result.is_err() {
            self.restore_state().await;
        }
        result
    }

    /// Read the file from disk, patch in missing message keys, and persist
    /// the merged document if anything was added.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, or written back.
    /// The previously loaded configuration, if any, stays in place.
    pub async fn load(&self) -> Result<LoadReport> {
        let _disk = self.disk.lock().await;
        self.load_locked().await
    }

    /// Re-read the configuration from disk. Does not consult the remote
    /// source or the version tag.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub async fn reload(&self) -> Result<LoadReport> {
        let report = self.load().await?;
        info!("Configuration reloaded");
        Ok(report)
    }

    async fn sync_locked(&self) -> Result<SyncReport> {
        let reason = if tokio::fs::try_exists(&self.path).await? {
            let on_disk = read_config_file(&self.path).await?;
            if on_disk.is_current() {
                None
            } else {
                Some(FetchReason::Stale {
                    found: on_disk.version(),
                })
            }
        } else {
            Some(FetchReason::Missing)
        };

        if let Some(reason) = &reason {
            match reason {
                FetchReason::Missing => info!("Creating configuration from {}", self.url),
                FetchReason::Stale { .. } => {
                    info!("Updating configuration ({reason}) from {}", self.url);
                }
            }
            self.source.fetch(&self.url, &self.path).await?;
        }

        let load = self.load_locked().await?;
        Ok(SyncReport {
            fetched: reason,
            load,
        })
    }

    async fn load_locked(&self) -> Result<LoadReport> {
        let parsed = read_config_file(&self.path).await?;
        let (merged, patched) = parsed.with_defaults();

        let persisted = !patched.is_empty();
        if persisted {
            let names: Vec<String> = patched.iter().map(ToString::to_string).collect();
            info!("Added missing message keys: {}", names.join(", "));
            write_config_file(&self.path, &merged).await?;
        } else {
            debug!("Configuration complete, nothing to patch");
        }

        self.install(merged).await;
        Ok(LoadReport { patched, persisted })
    }

    async fn install(&self, config: Config) {
        let mut inner = self.inner.write().await;
        inner.config = Some(Arc::new(config));
        inner.state = StoreState::Loaded;
    }

    async fn set_state(&self, state: StoreState) {
        self.inner.write().await.state = state;
    }

    async fn restore_state(&self) {
        let mut inner = self.inner.write().await;
        inner.state = if inner.config.is_some() {
            StoreState::Loaded
        } else {
            StoreState::Uninitialized
        };
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("path", &self.path)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
