//! Read-only view over the host's connected sessions.
//!
//! Every call goes straight to the host registry; nothing is cached, so a
//! fresh call always reflects who is connected right now.

use std::{fmt, sync::Arc};

use crate::host::{SessionHandle, SessionRegistry};

/// Latency in whole milliseconds, printed as a plain decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millis(pub u64);

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Borrowed lookup of a host session. Holding one does not keep the
/// connection alive; check liveness before trusting its metric.
#[derive(Clone)]
pub struct SessionRef(Arc<dyn SessionHandle>);

impl SessionRef {
    /// Display name of the session.
    pub fn name(&self) -> String {
        self.0.username()
    }
}

impl From<Arc<dyn SessionHandle>> for SessionRef {
    fn from(handle: Arc<dyn SessionHandle>) -> Self {
        Self(handle)
    }
}

impl fmt::Debug for SessionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionRef").field(&self.0.username()).finish()
    }
}

/// Adapter over the host's session registry.
#[derive(Clone)]
pub struct SessionDirectory {
    registry: Arc<dyn SessionRegistry>,
}

impl SessionDirectory {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve a typed name to a session. Case handling is the host's.
    pub fn find_by_name(&self, name: &str) -> Option<SessionRef> {
        self.registry.find_session_by_name(name).map(SessionRef::from)
    }

    /// Current latency, or `None` if the session has since disconnected.
    pub fn current_metric(&self, session: &SessionRef) -> Option<Millis> {
        session
            .0
            .is_live()
            .then(|| Millis(session.0.current_latency()))
    }

    /// Snapshot of connected names taken at call time.
    pub fn all_names(&self) -> impl Iterator<Item = String> {
        self.registry.list_all_session_names().into_iter()
    }
}

impl fmt::Debug for SessionDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionDirectory").finish_non_exhaustive()
    }
}
