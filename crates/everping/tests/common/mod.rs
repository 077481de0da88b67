//! Shared in-memory host for integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::{
    collections::BTreeMap,
    path::Path,
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use everping::{
    CommandHandler, CommandRegistrar, CommandSource, EverPing, SessionHandle, SessionRegistry,
    ADMIN_CAPABILITY,
};
use everping_core::{atomic::write_atomic, Config, ConfigStore, FetchError, RemoteSource};

/// A connected user whose latency and liveness tests can change.
pub struct FakeSession {
    name: String,
    latency: AtomicU64,
    live: AtomicBool,
    latency_reads: AtomicUsize,
}

impl FakeSession {
    pub fn new(name: &str, latency: u64) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            latency: AtomicU64::new(latency),
            live: AtomicBool::new(true),
            latency_reads: AtomicUsize::new(0),
        })
    }

    pub fn disconnect(&self) {
        self.live.store(false, Ordering::SeqCst);
    }

    /// How many times the host was asked for this session's latency.
    pub fn latency_reads(&self) -> usize {
        self.latency_reads.load(Ordering::SeqCst)
    }
}

impl SessionHandle for FakeSession {
    fn username(&self) -> String {
        self.name.clone()
    }

    fn current_latency(&self) -> u64 {
        self.latency_reads.fetch_add(1, Ordering::SeqCst);
        self.latency.load(Ordering::SeqCst)
    }

    fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

/// Registry keyed by exact name.
#[derive(Default)]
pub struct FakeRegistry {
    sessions: Mutex<BTreeMap<String, Arc<FakeSession>>>,
}

impl FakeRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn connect(&self, session: &Arc<FakeSession>) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.name.clone(), Arc::clone(session));
    }

    pub fn remove(&self, name: &str) {
        self.sessions.lock().unwrap().remove(name);
    }
}

impl SessionRegistry for FakeRegistry {
    fn find_session_by_name(&self, name: &str) -> Option<Arc<dyn SessionHandle>> {
        self.sessions
            .lock()
            .unwrap()
            .get(name)
            .map(|s| Arc::clone(s) as Arc<dyn SessionHandle>)
    }

    fn list_all_session_names(&self) -> Vec<String> {
        self.sessions.lock().unwrap().keys().cloned().collect()
    }
}

/// Invoker: either a player session or the console, with or without admin.
pub struct FakeSource {
    session: Option<Arc<FakeSession>>,
    admin: bool,
}

impl FakeSource {
    pub fn player(session: &Arc<FakeSession>) -> Self {
        Self {
            session: Some(Arc::clone(session)),
            admin: false,
        }
    }

    pub fn console() -> Self {
        Self {
            session: None,
            admin: true,
        }
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }
}

impl CommandSource for FakeSource {
    fn session(&self) -> Option<Arc<dyn SessionHandle>> {
        self.session
            .as_ref()
            .map(|s| Arc::clone(s) as Arc<dyn SessionHandle>)
    }

    fn has_capability(&self, capability: &str) -> bool {
        self.admin && capability == ADMIN_CAPABILITY
    }
}

/// Captures registrations made during init.
#[derive(Default)]
pub struct FakeRegistrar {
    pub commands: Vec<(String, Vec<String>, Arc<dyn CommandHandler>)>,
}

impl FakeRegistrar {
    pub fn handler(&self, verb_or_alias: &str) -> Option<Arc<dyn CommandHandler>> {
        self.commands
            .iter()
            .find(|(verb, aliases, _)| verb == verb_or_alias || aliases.iter().any(|a| a == verb_or_alias))
            .map(|(_, _, handler)| Arc::clone(handler))
    }
}

impl CommandRegistrar for FakeRegistrar {
    fn register(&mut self, verb: &str, aliases: &[&str], handler: Arc<dyn CommandHandler>) {
        self.commands.push((
            verb.to_string(),
            aliases.iter().map(ToString::to_string).collect(),
            handler,
        ));
    }
}

/// Remote source that serves the seeded document, or fails.
pub struct StaticRemote {
    body: Option<String>,
    calls: AtomicUsize,
}

impl StaticRemote {
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self {
            body: Some(Config::default().to_yaml_string().unwrap()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn offline() -> Arc<Self> {
        Arc::new(Self {
            body: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RemoteSource for StaticRemote {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let Some(body) = &self.body else {
            return Err(FetchError::Request {
                url: url.to_string(),
                reason: "offline".to_string(),
            });
        };
        write_atomic(destination, body.as_bytes()).map_err(|e| FetchError::Write {
            path: destination.display().to_string(),
            reason: e.to_string(),
        })
    }
}

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// A plugin whose config has been synced from the seeded remote.
pub async fn synced_plugin(data_dir: &Path, registry: Arc<FakeRegistry>) -> EverPing {
    let store = ConfigStore::new(data_dir, StaticRemote::seeded());
    let plugin = EverPing::new(store, registry);
    plugin.config().ensure_current().await.unwrap();
    plugin
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
