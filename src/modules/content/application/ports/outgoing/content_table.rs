use crate::content::domain::{Language, SiteContent};

/// The live default-content table, consulted when stored content still
/// matches the compiled-in default for a language.
pub trait ContentTable: Send + Sync {
    fn content_for(&self, lang: Language) -> SiteContent;
}
