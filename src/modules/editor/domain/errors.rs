use super::fields::ListKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("Index {index} is out of range for {list} (length {len})")]
    IndexOutOfRange {
        list: ListKind,
        index: usize,
        len: usize,
    },

    #[error("Item of kind {found} does not belong in {expected}")]
    ItemKindMismatch { expected: ListKind, found: ListKind },

    #[error("Percentage {0} is outside 0..=100")]
    InvalidPercentage(u8),

    #[error("Photo is {size} bytes; the limit is {max} bytes")]
    PhotoTooLarge { size: usize, max: usize },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Import rejected: {0}")]
    InvalidImport(String),

    #[error("Editor session is no longer open")]
    SessionClosed,

    #[error("Storage error: {0}")]
    Storage(String),
}
