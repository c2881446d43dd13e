use std::sync::Arc;

use actix_web::web;

use crate::auth::application::domain::entities::SessionId;
use crate::content::application::services::ContentStore;
use crate::content::domain::{default_content, BilingualContent};
use crate::editor::application::ports::incoming::{EditorUseCase, EditorView};
use crate::editor::application::services::EditorService;
use crate::editor::domain::PhotoPolicy;
use crate::shared::storage::{keys, InMemoryKeyValueStore};
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::auth_helper::registry_with_session;
use crate::tests::support::stubs::StaticContentTable;
use crate::AppState;

/// A real content store and editor over in-memory storage, with one live
/// admin session.
pub struct EditorHarness {
    pub state: web::Data<AppState>,
    pub token: String,
    kv: Arc<InMemoryKeyValueStore>,
    editor: Arc<EditorService>,
}

impl EditorHarness {
    /// The committed record, if anything has been written.
    pub fn stored_content(&self) -> Option<BilingualContent> {
        self.kv
            .raw(keys::SITE_CONTENT)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// The session's working copy.
    pub async fn view(&self) -> EditorView {
        self.editor
            .view(&SessionId::from_token(&self.token))
            .await
            .unwrap()
    }
}

pub async fn editor_harness() -> EditorHarness {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let store = Arc::new(
        ContentStore::load(
            kv.clone(),
            Arc::new(StaticContentTable::new(default_content().clone())),
        )
        .await,
    );
    let (registry, token) = registry_with_session();
    let editor = Arc::new(EditorService::new(
        store.clone(),
        registry.clone(),
        PhotoPolicy::default(),
    ));

    let state = TestAppStateBuilder::default()
        .with_storage(kv.clone())
        .with_content_store_arc(store)
        .with_session_registry(registry)
        .with_editor_arc(editor.clone())
        .build();

    EditorHarness {
        state,
        token,
        kv,
        editor,
    }
}
