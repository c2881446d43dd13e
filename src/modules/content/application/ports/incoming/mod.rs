mod content_store;

pub use content_store::{ContentStoreError, ContentStoreUseCase, Customization, ResetScope};
