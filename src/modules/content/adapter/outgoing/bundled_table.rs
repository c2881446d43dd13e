use crate::content::application::ports::outgoing::ContentTable;
use crate::content::domain::{default_content, Language, SiteContent};

/// Serves the compiled-in default content.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledContentTable;

impl ContentTable for BundledContentTable {
    fn content_for(&self, lang: Language) -> SiteContent {
        default_content().get(lang).clone()
    }
}
