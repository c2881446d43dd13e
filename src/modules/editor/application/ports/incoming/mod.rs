mod editor;

pub use editor::{EditorUseCase, EditorView, ExportedContent, ImportOutcome};
