//! Session Store
//!
//! Owns the session, writes it through to the key-value store after every
//! change and tells observers about it. Reads always see the latest
//! in-memory state; a failed write is logged and never surfaces to callers.

use parking_lot::RwLock;
use std::sync::Arc;

use switchboard_storage::KeyValueStore;
use switchboard_tabs::{Tab, TabId};

use crate::error::SessionError;
use crate::observer::ObserverList;
use crate::record;
use crate::session::{Session, SessionSnapshot};
use crate::{Result, SubscriptionId};

/// Slot the session record is written to
pub const DEFAULT_SESSION_KEY: &str = "session.tabs";

pub struct SessionStore {
    /// Authoritative in-memory session
    session: Arc<RwLock<Session>>,
    /// Local persistence backend
    backend: Arc<dyn KeyValueStore>,
    /// Key of the persisted record
    key: Arc<str>,
    observers: Arc<ObserverList>,
}

impl SessionStore {
    /// Create an empty store without reading persisted state
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<Arc<str>>) -> Self {
        Self::with_session(backend, key.into(), Session::new())
    }

    /// Create a store from the last persisted session.
    ///
    /// A missing, unreadable or corrupt record yields an empty session.
    pub fn restore(backend: Arc<dyn KeyValueStore>, key: impl Into<Arc<str>>) -> Self {
        let key = key.into();
        let session = match Self::read_record(backend.as_ref(), &key) {
            Ok(Some(session)) => session,
            Ok(None) => Session::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding persisted session");
                Session::new()
            }
        };

        tracing::info!(
            key = %key,
            tab_count = session.len(),
            active_id = ?session.active_id(),
            "Restored session"
        );

        Self::with_session(backend, key, session)
    }

    fn with_session(backend: Arc<dyn KeyValueStore>, key: Arc<str>, session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            backend,
            key,
            observers: Arc::new(ObserverList::default()),
        }
    }

    fn read_record(backend: &dyn KeyValueStore, key: &str) -> Result<Option<Session>> {
        let raw = backend
            .get(key)
            .map_err(|e| SessionError::PersistenceReadCorrupt(e.to_string()))?;

        raw.map(|raw| record::decode(&raw)).transpose()
    }

    // === Mutations ===

    /// Open a tab (or focus it if already open) and make it active.
    ///
    /// Returns whether the session changed; re-opening the active tab does not.
    pub fn open(&self, tab: Tab) -> Result<bool> {
        let tab_id = tab.id.clone();
        let mut rejected = None;

        let changed = self.mutate("open", |session| match session.open(tab) {
            Ok(changed) => changed,
            Err(e) => {
                rejected = Some(e);
                false
            }
        });

        if let Some(e) = rejected {
            tracing::warn!(tab_id = ?tab_id, error = %e, "Rejected tab");
            return Err(e);
        }

        if changed {
            tracing::info!(tab_id = %tab_id, "Opened tab");
        }
        Ok(changed)
    }

    /// Close a tab; unknown ids are ignored
    pub fn close(&self, id: &str) -> bool {
        let changed = self.mutate("close", |session| session.close(id));
        if changed {
            tracing::info!(tab_id = %id, "Closed tab");
        }
        changed
    }

    /// Activate an open tab; unknown ids are ignored
    pub fn set_active(&self, id: &str) -> bool {
        self.mutate("set_active", |session| session.set_active(id))
    }

    /// Close every tab except `id`; unknown ids are ignored
    pub fn close_others(&self, id: &str) -> bool {
        let changed = self.mutate("close_others", |session| session.close_others(id));
        if changed {
            tracing::info!(tab_id = %id, "Closed other tabs");
        }
        changed
    }

    pub fn close_all(&self) -> bool {
        let changed = self.mutate("close_all", Session::close_all);
        if changed {
            tracing::info!("Closed all tabs");
        }
        changed
    }

    /// Apply a mutation, then persist and notify if it changed anything.
    ///
    /// The write lock is held through the persistence write so writes land
    /// in mutation order. Observers run after the lock is released.
    fn mutate<F>(&self, op: &'static str, f: F) -> bool
    where
        F: FnOnce(&mut Session) -> bool,
    {
        let snapshot = {
            let mut session = self.session.write();
            if !f(&mut *session) {
                tracing::debug!(op, "Session unchanged");
                return false;
            }

            debug_assert!(session.is_consistent(), "{op} broke session invariants");

            self.persist(&session);
            SessionSnapshot::new(session.clone())
        };

        self.observers.notify(&snapshot);
        true
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.write_record(session) {
            tracing::warn!(
                key = %self.key,
                error = %e,
                "Session not persisted, keeping in-memory state"
            );
        }
    }

    fn write_record(&self, session: &Session) -> Result<()> {
        if session.is_empty() {
            return self
                .backend
                .remove(&self.key)
                .map_err(|e| SessionError::PersistenceWriteFailed(e.to_string()));
        }

        let raw = record::encode(session)?;
        self.backend
            .set(&self.key, &raw)
            .map_err(|e| SessionError::PersistenceWriteFailed(e.to_string()))
    }

    // === Observers ===

    /// Register a callback for every state-changing mutation
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        self.observers.add(Arc::new(observer))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    // === Reads ===

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.session.read().clone())
    }

    /// Open tabs in display order
    pub fn tabs(&self) -> Vec<Tab> {
        self.session.read().tabs().to_vec()
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.session.read().active_id().map(str::to_string)
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.session.read().active_tab().cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.session.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.session.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.read().is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            backend: Arc::clone(&self.backend),
            key: Arc::clone(&self.key),
            observers: Arc::clone(&self.observers),
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.session.read())
            .field("key", &self.key)
            .field("subscriber_count", &self.observers.len())
            .finish()
    }
}
