use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::auth::application::domain::entities::SessionId;
use crate::editor::domain::{EditorError, WorkingCopy};

/// Working copies keyed by admin session. No lock is held across `.await`.
#[derive(Debug, Default)]
pub struct DraftRegistry {
    drafts: Mutex<HashMap<SessionId, WorkingCopy>>,
}

impl DraftRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, session: &SessionId) -> bool {
        self.lock().contains_key(session)
    }

    pub fn insert(&self, session: &SessionId, draft: WorkingCopy) {
        self.lock().insert(session.clone(), draft);
    }

    /// Inserts `seed` when the session has no draft yet, then applies `f`.
    /// Without a seed a missing draft means it was closed concurrently.
    pub fn apply<R>(
        &self,
        session: &SessionId,
        seed: Option<WorkingCopy>,
        f: impl FnOnce(&mut WorkingCopy) -> Result<R, EditorError>,
    ) -> Result<R, EditorError> {
        let mut drafts = self.lock();

        if let Some(seed) = seed {
            drafts.entry(session.clone()).or_insert(seed);
        }

        match drafts.get_mut(session) {
            Some(draft) => f(draft),
            None => Err(EditorError::SessionClosed),
        }
    }

    pub fn remove(&self, session: &SessionId) -> Option<WorkingCopy> {
        self.lock().remove(session)
    }

    /// Keeps only drafts whose session satisfies `is_live`.
    pub fn retain(&self, is_live: impl Fn(&SessionId) -> bool) {
        self.lock().retain(|session, _| is_live(session));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, WorkingCopy>> {
        self.drafts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
