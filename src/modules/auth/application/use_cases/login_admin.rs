use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::info;

use crate::auth::application::{
    domain::entities::{AdminCredentials, SessionId, SessionRecord},
    ports::outgoing::{PasswordHasher, SessionRegistry},
    services::session_token::generate_session_token,
};

// ========================= Login Request =========================
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username and password are required")]
    MissingField,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim().to_string();

        if username.is_empty() || password.is_empty() {
            return Err(LoginRequestError::MissingField);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Deliberately does not say which field was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResponse {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionRegistry>,
    session_ttl: Duration,
}

impl LoginAdminUseCase {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionRegistry>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            sessions,
            session_ttl,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        // The hash is checked even for an unknown username so both failures
        // take the same path.
        let password_ok = self
            .password_hasher
            .verify_password(request.password(), &self.credentials.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        let username_ok = request.username() == self.credentials.username;

        if !(password_ok && username_ok) {
            return Err(LoginError::InvalidCredentials);
        }

        let now = Utc::now();
        let purged = self.sessions.purge_expired(now);
        if !purged.is_empty() {
            info!(count = purged.len(), "Purged expired admin sessions");
        }

        let token = generate_session_token();
        let expires_at = now + self.session_ttl;

        self.sessions.insert(SessionRecord {
            session_id: SessionId::from_token(&token),
            username: self.credentials.username.clone(),
            created_at: now,
            expires_at,
        });

        Ok(LoginAdminResponse {
            token,
            username: self.credentials.username.clone(),
            expires_at,
        })
    }
}
