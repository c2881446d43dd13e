use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{SessionId, SessionRecord};

/// Live admin sessions. Lookups sit on the request path, so the port is
/// synchronous.
pub trait SessionRegistry: Send + Sync {
    fn insert(&self, record: SessionRecord);

    /// Returns the session only if it exists and has not expired at `now`.
    fn find_live(&self, session_id: &SessionId, now: DateTime<Utc>) -> Option<SessionRecord>;

    /// Returns whether a session was removed.
    fn revoke(&self, session_id: &SessionId) -> bool;

    /// Drops expired sessions and returns their ids.
    fn purge_expired(&self, now: DateTime<Utc>) -> Vec<SessionId>;
}
