pub mod routes;

use actix_web::{web, HttpResponse};

use crate::{content::domain::Language, shared::api::ApiResponse, AppState};

/// An explicit `lang` wins; otherwise the stored preference applies.
pub async fn resolve_language_or_response(
    data: &web::Data<AppState>,
    requested: Option<&str>,
) -> Result<Language, HttpResponse> {
    match requested {
        Some(code) => code.parse::<Language>().map_err(|e| {
            ApiResponse::bad_request("UNSUPPORTED_LANGUAGE", &e.to_string())
        }),
        None => Ok(data.language_preference_use_case.current().await),
    }
}
