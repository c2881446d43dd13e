use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::SessionId, ports::outgoing::SessionRegistry,
};
use crate::content::application::ports::incoming::{
    ContentStoreError, ContentStoreUseCase, ResetScope,
};
use crate::content::domain::{ContentSnapshot, Language};
use crate::editor::application::ports::incoming::{
    EditorUseCase, EditorView, ExportedContent, ImportOutcome,
};
use crate::editor::application::services::DraftRegistry;
use crate::editor::domain::{
    export_file_name, EditorError, ListItem, ListKind, PhotoPolicy, ScalarField, WorkingCopy,
};

pub struct EditorService {
    store: Arc<dyn ContentStoreUseCase>,
    sessions: Arc<dyn SessionRegistry>,
    drafts: DraftRegistry,
    photo_policy: PhotoPolicy,
}

impl EditorService {
    pub fn new(
        store: Arc<dyn ContentStoreUseCase>,
        sessions: Arc<dyn SessionRegistry>,
        photo_policy: PhotoPolicy,
    ) -> Self {
        Self {
            store,
            sessions,
            drafts: DraftRegistry::new(),
            photo_policy,
        }
    }

    async fn seed(&self, language: Language) -> WorkingCopy {
        WorkingCopy::new(self.store.get_bilingual().await, language)
    }

    /// Runs `f` against the session's draft, seeding it first if needed.
    async fn edit<R>(
        &self,
        session: &SessionId,
        f: impl FnOnce(&mut WorkingCopy) -> Result<R, EditorError>,
    ) -> Result<R, EditorError> {
        let seed = if self.drafts.contains(session) {
            None
        } else {
            Some(self.seed(Language::default()).await)
        };

        self.drafts.apply(session, seed, f)
    }

    async fn edit_and_view(
        &self,
        session: &SessionId,
        f: impl FnOnce(&mut WorkingCopy) -> Result<(), EditorError>,
    ) -> Result<EditorView, EditorError> {
        let draft = self
            .edit(session, |draft| {
                f(draft)?;
                Ok(draft.clone())
            })
            .await?;

        Ok(self.view_of(draft).await)
    }

    async fn view_of(&self, draft: WorkingCopy) -> EditorView {
        let committed = self.store.get_bilingual().await;
        let unsaved_changes = *draft.content() != committed;

        EditorView {
            language: draft.language(),
            content: draft.content().clone(),
            unsaved_changes,
        }
    }

    fn prune_stale_drafts(&self) {
        let now = Utc::now();
        self.drafts
            .retain(|session| self.sessions.find_live(session, now).is_some());
    }
}

fn storage_error(e: ContentStoreError) -> EditorError {
    EditorError::Storage(e.to_string())
}

#[async_trait]
impl EditorUseCase for EditorService {
    async fn open(
        &self,
        session: &SessionId,
        language: Option<Language>,
    ) -> Result<EditorView, EditorError> {
        self.prune_stale_drafts();

        let draft = self.seed(language.unwrap_or_default()).await;
        self.drafts.insert(session, draft.clone());
        info!(language = %draft.language(), "Editor opened");

        Ok(self.view_of(draft).await)
    }

    async fn view(&self, session: &SessionId) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |_| Ok(())).await
    }

    async fn switch_language(
        &self,
        session: &SessionId,
        language: Language,
    ) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| {
            draft.switch_language(language);
            Ok(())
        })
        .await
    }

    async fn set_field(
        &self,
        session: &SessionId,
        field: ScalarField,
        value: String,
    ) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| {
            draft.set_field(field, value);
            Ok(())
        })
        .await
    }

    async fn append_item(
        &self,
        session: &SessionId,
        list: ListKind,
        item: Option<ListItem>,
    ) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| draft.append(list, item).map(|_| ()))
            .await
    }

    async fn replace_item(
        &self,
        session: &SessionId,
        list: ListKind,
        index: usize,
        item: ListItem,
    ) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| draft.replace(list, index, item))
            .await
    }

    async fn remove_item(
        &self,
        session: &SessionId,
        list: ListKind,
        index: usize,
    ) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| draft.remove(list, index))
            .await
    }

    async fn append_responsibility(
        &self,
        session: &SessionId,
        experience: usize,
        text: Option<String>,
    ) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| {
            draft.append_responsibility(experience, text).map(|_| ())
        })
        .await
    }

    async fn replace_responsibility(
        &self,
        session: &SessionId,
        experience: usize,
        index: usize,
        text: String,
    ) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| {
            draft.replace_responsibility(experience, index, text)
        })
        .await
    }

    async fn remove_responsibility(
        &self,
        session: &SessionId,
        experience: usize,
        index: usize,
    ) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| {
            draft.remove_responsibility(experience, index)
        })
        .await
    }

    async fn upload_photo(
        &self,
        session: &SessionId,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<EditorView, EditorError> {
        let data_uri = self.photo_policy.to_data_uri(bytes, mime_type)?;
        info!(size = bytes.len(), "Profile photo staged");

        self.edit_and_view(session, |draft| {
            draft.set_photo(Some(data_uri));
            Ok(())
        })
        .await
    }

    async fn remove_photo(&self, session: &SessionId) -> Result<EditorView, EditorError> {
        self.edit_and_view(session, |draft| {
            draft.set_photo(None);
            Ok(())
        })
        .await
    }

    async fn save(&self, session: &SessionId) -> Result<EditorView, EditorError> {
        let draft = self.edit(session, |draft| Ok(draft.clone())).await?;

        self.store
            .update_bilingual_content(draft.content().clone())
            .await
            .map_err(storage_error)?;
        info!("Editor changes saved");

        Ok(self.view_of(draft).await)
    }

    async fn reset(
        &self,
        session: &SessionId,
        scope: ResetScope,
    ) -> Result<EditorView, EditorError> {
        let language = self.edit(session, |draft| Ok(draft.language())).await?;

        self.store.reset_content(scope).await.map_err(storage_error)?;

        let draft = self.seed(language).await;
        self.drafts.insert(session, draft.clone());
        info!(?scope, "Content reset from editor");

        Ok(self.view_of(draft).await)
    }

    async fn export(&self, session: &SessionId) -> Result<ExportedContent, EditorError> {
        let content = self.edit(session, |draft| Ok(draft.content().clone())).await?;

        Ok(ExportedContent {
            file_name: export_file_name(Utc::now().date_naive()),
            content,
        })
    }

    async fn import(&self, session: &SessionId, raw: &str) -> Result<ImportOutcome, EditorError> {
        let snapshot = ContentSnapshot::decode(raw).map_err(|e| {
            warn!("Rejected content import: {}", e);
            EditorError::InvalidImport(e.to_string())
        })?;

        match snapshot {
            ContentSnapshot::Bilingual(content) => {
                self.store
                    .update_bilingual_content(content.clone())
                    .await
                    .map_err(storage_error)?;

                let draft = self
                    .edit(session, |draft| {
                        draft.replace_all(content);
                        Ok(draft.clone())
                    })
                    .await?;
                info!("Imported bilingual content and committed it");

                Ok(ImportOutcome {
                    requires_review: false,
                    committed: true,
                    editor: self.view_of(draft).await,
                })
            }
            ContentSnapshot::Legacy(content) => {
                let draft = self
                    .edit(session, |draft| {
                        draft.replace_active(content);
                        Ok(draft.clone())
                    })
                    .await?;
                info!(language = %draft.language(), "Imported legacy content into the working copy");

                Ok(ImportOutcome {
                    requires_review: true,
                    committed: false,
                    editor: self.view_of(draft).await,
                })
            }
        }
    }

    async fn close(&self, session: &SessionId) {
        if self.drafts.remove(session).is_some() {
            info!("Editor draft discarded");
        }
    }
}
