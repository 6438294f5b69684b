//! Session bookkeeping: one inventory store per open session.

use std::collections::BTreeMap;

use stockpile_store::{InventoryStore, StoreConfig};
use stockpile_types::SessionId;
use tracing::info;

use crate::error::SessionError;

/// Registry mapping open sessions to their inventory stores.
///
/// Callers address inventories through an explicit [`SessionId`] handle
/// rather than a process-wide global, so independent sessions (game
/// instances, test fixtures, editor previews) can coexist without sharing
/// state. A store lives exactly as long as its session: opened together,
/// dropped together.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: BTreeMap<SessionId, InventoryStore>,
}

impl SessionRegistry {
    /// Create a registry with no open sessions.
    pub const fn new() -> Self {
        Self {
            sessions: BTreeMap::new(),
        }
    }

    // ----- Session lifecycle -----

    /// Open a session with the given store configuration.
    pub fn open_session(&mut self, config: StoreConfig) -> SessionId {
        let id = SessionId::new();
        let store = InventoryStore::new(config);
        info!(
            session = %id,
            max_slots = store.max_slots(),
            auto_stack = store.auto_stack(),
            "Session opened"
        );
        self.sessions.insert(id, store);
        id
    }

    /// Open a session with the default store configuration.
    pub fn open_default_session(&mut self) -> SessionId {
        self.open_session(StoreConfig::default())
    }

    /// Close a session and return its store (with whatever it still holds).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionNotFound`] if the session is not open.
    pub fn close_session(&mut self, id: SessionId) -> Result<InventoryStore, SessionError> {
        let store = self
            .sessions
            .remove(&id)
            .ok_or(SessionError::SessionNotFound(id))?;
        info!(session = %id, entries = store.item_count(), "Session closed");
        Ok(store)
    }

    // ----- Store access -----

    /// Resolve a session's inventory store for reading.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionNotFound`] if the session is not open.
    pub fn store(&self, id: SessionId) -> Result<&InventoryStore, SessionError> {
        self.sessions
            .get(&id)
            .ok_or(SessionError::SessionNotFound(id))
    }

    /// Resolve a session's inventory store for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionNotFound`] if the session is not open.
    pub fn store_mut(&mut self, id: SessionId) -> Result<&mut InventoryStore, SessionError> {
        self.sessions
            .get_mut(&id)
            .ok_or(SessionError::SessionNotFound(id))
    }

    // ----- Introspection -----

    /// Number of open sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Ids of all open sessions, in id order.
    pub fn session_ids(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.sessions.keys().copied()
    }
}
