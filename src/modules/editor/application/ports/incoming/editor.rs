use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::SessionId;
use crate::content::application::ports::incoming::ResetScope;
use crate::content::domain::{BilingualContent, Language};
use crate::editor::domain::{EditorError, ListItem, ListKind, ScalarField};

//
// ──────────────────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────────────────
//

/// The working copy as returned after every editor call.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub language: Language,
    pub content: BilingualContent,
    /// The working copy differs from the committed content.
    pub unsaved_changes: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedContent {
    pub file_name: String,
    pub content: BilingualContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    /// A legacy single-language file was loaded into the active language
    /// only and still has to be reviewed and saved.
    pub requires_review: bool,
    pub committed: bool,
    pub editor: EditorView,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

/// One working copy per admin session. Operations other than `open` seed
/// the copy from the committed content when none exists yet.
#[async_trait]
pub trait EditorUseCase: Send + Sync {
    /// Seeds (or re-seeds) the working copy, discarding unsaved edits.
    async fn open(
        &self,
        session: &SessionId,
        language: Option<Language>,
    ) -> Result<EditorView, EditorError>;

    async fn view(&self, session: &SessionId) -> Result<EditorView, EditorError>;

    async fn switch_language(
        &self,
        session: &SessionId,
        language: Language,
    ) -> Result<EditorView, EditorError>;

    async fn set_field(
        &self,
        session: &SessionId,
        field: ScalarField,
        value: String,
    ) -> Result<EditorView, EditorError>;

    async fn append_item(
        &self,
        session: &SessionId,
        list: ListKind,
        item: Option<ListItem>,
    ) -> Result<EditorView, EditorError>;

    async fn replace_item(
        &self,
        session: &SessionId,
        list: ListKind,
        index: usize,
        item: ListItem,
    ) -> Result<EditorView, EditorError>;

    async fn remove_item(
        &self,
        session: &SessionId,
        list: ListKind,
        index: usize,
    ) -> Result<EditorView, EditorError>;

    async fn append_responsibility(
        &self,
        session: &SessionId,
        experience: usize,
        text: Option<String>,
    ) -> Result<EditorView, EditorError>;

    async fn replace_responsibility(
        &self,
        session: &SessionId,
        experience: usize,
        index: usize,
        text: String,
    ) -> Result<EditorView, EditorError>;

    async fn remove_responsibility(
        &self,
        session: &SessionId,
        experience: usize,
        index: usize,
    ) -> Result<EditorView, EditorError>;

    async fn upload_photo(
        &self,
        session: &SessionId,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<EditorView, EditorError>;

    async fn remove_photo(&self, session: &SessionId) -> Result<EditorView, EditorError>;

    /// Commits both languages in a single store call.
    async fn save(&self, session: &SessionId) -> Result<EditorView, EditorError>;

    /// Resets the committed content, then re-seeds the working copy.
    async fn reset(&self, session: &SessionId, scope: ResetScope)
        -> Result<EditorView, EditorError>;

    async fn export(&self, session: &SessionId) -> Result<ExportedContent, EditorError>;

    async fn import(&self, session: &SessionId, raw: &str) -> Result<ImportOutcome, EditorError>;

    /// Drops the working copy without saving.
    async fn close(&self, session: &SessionId);
}
