use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    content::domain::SiteContent,
    i18n::adapter::incoming::web::resolve_language_or_response,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ContentQuery {
    /// `uk` or `en`. Falls back to the stored language preference.
    #[param(example = "en")]
    pub lang: Option<String>,
}

/// Displayed content
///
/// Returns what visitors see for one language: the stored record when it
/// has been customised, otherwise the live default table.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    params(ContentQuery),
    responses(
        (status = 200, description = "Content for the language", body = inline(SuccessResponse<SiteContent>)),
        (status = 400, description = "Unsupported language code", body = ErrorResponse),
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(
    query: web::Query<ContentQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lang = match resolve_language_or_response(&data, query.lang.as_deref()).await {
        Ok(lang) => lang,
        Err(resp) => return resp,
    };

    let content = data.content_store_use_case.resolve_display(lang).await;
    ApiResponse::success(content)
}
