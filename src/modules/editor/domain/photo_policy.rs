use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::errors::EditorError;

/// Limits applied to profile photo uploads before they are inlined.
#[derive(Debug, Clone)]
pub struct PhotoPolicy {
    pub max_file_size_bytes: usize,
}

impl Default for PhotoPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

impl PhotoPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;

    pub fn new(max_file_size_bytes: usize) -> Self {
        Self {
            max_file_size_bytes,
        }
    }

    /// Validates the upload and renders it as a base64 data URI.
    pub fn to_data_uri(&self, bytes: &[u8], mime_type: &str) -> Result<String, EditorError> {
        let mime = normalise_mime(mime_type);

        if !is_image(&mime) {
            return Err(EditorError::UnsupportedMediaType(mime));
        }

        if bytes.len() > self.max_file_size_bytes {
            return Err(EditorError::PhotoTooLarge {
                size: bytes.len(),
                max: self.max_file_size_bytes,
            });
        }

        Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }
}

/// Drops parameters (`; charset=...`) and lower-cases.
fn normalise_mime(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_image(mime: &str) -> bool {
    mime.strip_prefix("image/")
        .map(|subtype| !subtype.is_empty())
        .unwrap_or(false)
}
