use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use chrono::Utc;
use std::future::{ready, Ready};

use crate::{
    auth::application::domain::entities::SessionId, shared::api::ApiResponse, AppState,
};

/// A request carrying a live admin bearer token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session_id: SessionId,
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => {
                tracing::error!("AppState missing while authenticating admin request");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        let session_id = SessionId::from_token(&token);
        match state.session_registry.find_live(&session_id, Utc::now()) {
            Some(record) => ready(Ok(AdminSession {
                session_id: record.session_id,
                username: record.username,
            })),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_SESSION",
                "Session is invalid or has expired",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
