//! Per-session scoping of prediction history.
//!
//! A server hosting multiple simultaneous users must keep one history per
//! session key, never a process-wide store, or users would see each
//! other's predictions. The model itself is read-only after load and is
//! shared across sessions by the caller.

use std::collections::HashMap;

use uuid::Uuid;

use crate::history::HistoryStore;

/// One user session: a generated key and its own history.
#[derive(Debug, Clone)]
pub struct Session {
    key: String,
    pub history: HistoryStore,
}

impl Session {
    /// New session under a fresh UUID key.
    pub fn new() -> Self {
        Self::with_key(Uuid::new_v4().to_string())
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into(), history: HistoryStore::new() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Sessions indexed by key, created on first access.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session for `key`, creating it if this is the first access.
    pub fn session_mut(&mut self, key: &str) -> &mut Session {
        self.sessions.entry(key.to_string()).or_insert_with(|| Session::with_key(key))
    }

    /// Drop a session and its history. No-op for unknown keys.
    pub fn remove(&mut self, key: &str) {
        self.sessions.remove(key);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
