use actix_web::{get, put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    content::domain::Language,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LanguageBody {
    #[schema(example = "uk")]
    pub language: Language,
}

/// Current language preference
#[utoipa::path(
    get,
    path = "/api/language",
    tag = "content",
    responses(
        (status = 200, description = "Stored preference", body = inline(SuccessResponse<LanguageBody>)),
    )
)]
#[get("/api/language")]
pub async fn get_language_handler(data: web::Data<AppState>) -> impl Responder {
    let language = data.language_preference_use_case.current().await;
    ApiResponse::success(LanguageBody { language })
}

/// Change language preference
///
/// Persists immediately; subsequent reads without `?lang=` use it.
#[utoipa::path(
    put,
    path = "/api/language",
    tag = "content",
    request_body = LanguageBody,
    responses(
        (status = 200, description = "Preference stored", body = inline(SuccessResponse<LanguageBody>)),
        (status = 400, description = "Unsupported language code", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[put("/api/language")]
pub async fn set_language_handler(
    payload: web::Json<LanguageBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = payload.into_inner().language;

    match data.language_preference_use_case.set(language).await {
        Ok(()) => ApiResponse::success(LanguageBody { language }),
        Err(e) => {
            error!("Failed to store language preference: {}", e);
            ApiResponse::internal_error()
        }
    }
}
