//! Many sessions, each behind its own lock.
//!
//! The map itself sits behind a `RwLock` that is held only long enough to
//! look up or insert an `Arc`; the per-session `Mutex` covers the whole
//! read → compute → replace sequence of a closure or reset.  Operations on
//! different sessions never wait on each other.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::info;

use rc_core::{EdgeKey, SessionId};
use rc_export::{ExportOptions, Snapshot};
use rc_network::{DijkstraRouter, Router};

use crate::{ClosureReport, Session, SessionBuilder, SessionError, SessionResult};

pub type SharedSession<R> = Arc<Mutex<Session<R>>>;

pub struct SessionRegistry<R: Router = DijkstraRouter> {
    sessions: RwLock<FxHashMap<SessionId, SharedSession<R>>>,
    next_id:  AtomicU64,
}

impl<R: Router> Default for SessionRegistry<R> {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
            next_id:  AtomicU64::new(1),
        }
    }
}

impl<R: Router> SessionRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session under a fresh id and register it.
    ///
    /// The build runs outside any registry lock.
    pub fn create(&self, builder: SessionBuilder<R>) -> SessionResult<SessionId> {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = builder.id(id).build()?;
        self.sessions.write().insert(id, Arc::new(Mutex::new(session)));
        Ok(id)
    }

    /// Handle to a session.  Holding it does not lock the session.
    pub fn get(&self, id: SessionId) -> SessionResult<SharedSession<R>> {
        self.sessions.read().get(&id).cloned().ok_or(SessionError::SessionNotFound(id))
    }

    /// Run `f` with exclusive access to one session.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f:  impl FnOnce(&mut Session<R>) -> SessionResult<T>,
    ) -> SessionResult<T> {
        let session = self.get(id)?;
        let mut guard = session.lock();
        f(&mut guard)
    }

    pub fn close_edge(&self, id: SessionId, edge: EdgeKey) -> SessionResult<ClosureReport> {
        self.with_session(id, |s| s.close_edge(edge))
    }

    pub fn reset(&self, id: SessionId) -> SessionResult<()> {
        self.with_session(id, Session::reset)
    }

    pub fn snapshot(&self, id: SessionId, options: &ExportOptions) -> SessionResult<Snapshot> {
        self.with_session(id, |s| Ok(s.snapshot(options)))
    }

    /// Drop a session.  Handles obtained earlier through [`get`](Self::get)
    /// stay usable until released.
    pub fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().remove(&id).is_some();
        if removed {
            info!(session = %id, "session removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Registered ids, ascending.
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
