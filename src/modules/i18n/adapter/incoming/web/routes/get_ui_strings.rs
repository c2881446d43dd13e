use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    content::adapter::incoming::web::routes::ContentQuery,
    i18n::{adapter::incoming::web::resolve_language_or_response, domain::UiStrings},
    shared::api::ApiResponse,
    AppState,
};

/// Interface strings
///
/// Fixed navigation, button and form copy for one language.
#[utoipa::path(
    get,
    path = "/api/ui-strings",
    tag = "content",
    params(ContentQuery),
    responses(
        (status = 200, description = "Interface strings", body = inline(SuccessResponse<UiStrings>)),
        (status = 400, description = "Unsupported language code", body = ErrorResponse),
    )
)]
#[get("/api/ui-strings")]
pub async fn get_ui_strings_handler(
    query: web::Query<ContentQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match resolve_language_or_response(&data, query.lang.as_deref()).await {
        Ok(lang) => ApiResponse::success(UiStrings::for_language(lang)),
        Err(resp) => resp,
    }
}
