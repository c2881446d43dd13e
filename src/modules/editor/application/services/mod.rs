mod draft_registry;
mod editor_service;

pub use draft_registry::DraftRegistry;
pub use editor_service::EditorService;
