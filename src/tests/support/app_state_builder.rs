use crate::auth::adapter::outgoing::InMemorySessionRegistry;
use crate::auth::application::ports::outgoing::SessionRegistry;
use crate::auth::application::use_cases::{
    login_admin::ILoginAdminUseCase, logout_admin::ILogoutAdminUseCase,
};
use crate::content::application::ports::incoming::ContentStoreUseCase;
use crate::content::domain::Language;
use crate::editor::application::ports::incoming::EditorUseCase;
use crate::i18n::application::ports::incoming::LanguagePreferenceUseCase;
use crate::notification::application::ports::incoming::NotificationUseCase;
use crate::shared::storage::{InMemoryKeyValueStore, KeyValueStore};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` where every use case is a harmless stub unless a
/// test swaps in a real one.
pub struct TestAppStateBuilder {
    storage: Arc<dyn KeyValueStore>,
    content_store: Arc<dyn ContentStoreUseCase + Send + Sync>,
    language_preference: Arc<dyn LanguagePreferenceUseCase + Send + Sync>,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    logout_admin: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    session_registry: Arc<dyn SessionRegistry + Send + Sync>,
    editor: Arc<dyn EditorUseCase + Send + Sync>,
    notifications: Arc<dyn NotificationUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            storage: Arc::new(InMemoryKeyValueStore::new()),
            content_store: Arc::new(StubContentStore),
            language_preference: Arc::new(StubLanguagePreference::new(Language::Uk)),
            login_admin: Arc::new(StubLoginAdminUseCase),
            logout_admin: Arc::new(StubLogoutAdminUseCase),
            session_registry: Arc::new(InMemorySessionRegistry::new()),
            editor: Arc::new(StubEditorUseCase),
            notifications: Arc::new(StubNotificationUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_storage(mut self, storage: Arc<dyn KeyValueStore>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_content_store(
        mut self,
        uc: impl ContentStoreUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content_store = Arc::new(uc);
        self
    }

    pub fn with_content_store_arc(
        mut self,
        uc: Arc<dyn ContentStoreUseCase + Send + Sync>,
    ) -> Self {
        self.content_store = uc;
        self
    }

    pub fn with_language_preference(
        mut self,
        uc: impl LanguagePreferenceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.language_preference = Arc::new(uc);
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_logout_admin(
        mut self,
        uc: impl ILogoutAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.logout_admin = Arc::new(uc);
        self
    }

    pub fn with_session_registry(mut self, registry: Arc<InMemorySessionRegistry>) -> Self {
        self.session_registry = registry;
        self
    }

    pub fn with_editor(mut self, uc: impl EditorUseCase + Send + Sync + 'static) -> Self {
        self.editor = Arc::new(uc);
        self
    }

    pub fn with_editor_arc(mut self, uc: Arc<dyn EditorUseCase + Send + Sync>) -> Self {
        self.editor = uc;
        self
    }

    pub fn with_notifications(
        mut self,
        uc: impl NotificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.notifications = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            storage: self.storage,
            content_store_use_case: self.content_store,
            language_preference_use_case: self.language_preference,
            login_admin_use_case: self.login_admin,
            logout_admin_use_case: self.logout_admin,
            session_registry: self.session_registry,
            editor_use_case: self.editor,
            notification_use_case: self.notifications,
        })
    }
}
