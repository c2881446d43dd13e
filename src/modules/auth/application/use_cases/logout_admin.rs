use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::SessionId, ports::outgoing::SessionRegistry,
};

// ============================ Logout Admin Use Case =============================
#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    /// Revokes the session. Returns whether it was still registered.
    async fn execute(&self, session_id: &SessionId) -> bool;
}

#[derive(Clone)]
pub struct LogoutAdminUseCase {
    sessions: Arc<dyn SessionRegistry>,
}

impl LogoutAdminUseCase {
    pub fn new(sessions: Arc<dyn SessionRegistry>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, session_id: &SessionId) -> bool {
        let revoked = self.sessions.revoke(session_id);

        if revoked {
            info!("Admin session revoked");
        } else {
            warn!("Logout for a session that was no longer registered");
        }

        revoked
    }
}
