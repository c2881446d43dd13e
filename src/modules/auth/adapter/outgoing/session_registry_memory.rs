use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::auth::application::{
    domain::entities::{SessionId, SessionRecord},
    ports::outgoing::SessionRegistry,
};

/// Sessions live only as long as the process, like a browser session.
#[derive(Debug, Default)]
pub struct InMemorySessionRegistry {
    sessions: RwLock<HashMap<SessionId, SessionRecord>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<SessionId, SessionRecord>> {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, SessionRecord>> {
        self.sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionRegistry for InMemorySessionRegistry {
    fn insert(&self, record: SessionRecord) {
        self.write().insert(record.session_id.clone(), record);
    }

    fn find_live(&self, session_id: &SessionId, now: DateTime<Utc>) -> Option<SessionRecord> {
        self.read()
            .get(session_id)
            .filter(|record| !record.is_expired_at(now))
            .cloned()
    }

    fn revoke(&self, session_id: &SessionId) -> bool {
        self.write().remove(session_id).is_some()
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> Vec<SessionId> {
        let mut sessions = self.write();
        let expired: Vec<SessionId> = sessions
            .values()
            .filter(|record| record.is_expired_at(now))
            .map(|record| record.session_id.clone())
            .collect();

        for id in &expired {
            sessions.remove(id);
        }

        expired
    }
}
