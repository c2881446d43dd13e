// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

/// Large enough for a full bilingual record carrying an inline photo twice.
const JSON_LIMIT_BYTES: usize = 16 * 1024 * 1024;

/// Ceiling for raw bodies (photo uploads, content imports). The 5 MiB photo
/// rule is enforced by the editor so the client gets `PHOTO_TOO_LARGE`
/// instead of a bare 413.
const RAW_PAYLOAD_LIMIT_BYTES: usize = 16 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}

pub fn raw_payload_config() -> PayloadConfig {
    PayloadConfig::new(RAW_PAYLOAD_LIMIT_BYTES)
}
