use std::sync::Arc;

use actix_web::http::header::{self, HeaderName};
use chrono::{Duration, Utc};

use crate::auth::adapter::outgoing::InMemorySessionRegistry;
use crate::auth::application::domain::entities::{SessionId, SessionRecord};
use crate::auth::application::ports::outgoing::SessionRegistry;
use crate::auth::application::services::session_token::generate_session_token;

/// `Authorization: Bearer <token>` for `TestRequest::insert_header`.
pub fn bearer(token: &str) -> (HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Registers a live one-hour session for `admin` and returns its token.
pub fn seed_session(registry: &InMemorySessionRegistry) -> String {
    let token = generate_session_token();
    let now = Utc::now();

    registry.insert(SessionRecord {
        session_id: SessionId::from_token(&token),
        username: "admin".to_string(),
        created_at: now,
        expires_at: now + Duration::hours(1),
    });

    token
}

pub fn registry_with_session() -> (Arc<InMemorySessionRegistry>, String) {
    let registry = Arc::new(InMemorySessionRegistry::new());
    let token = seed_session(&registry);
    (registry, token)
}
