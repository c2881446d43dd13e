use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    notification::{
        adapter::incoming::web::notification_error_response,
        application::ports::incoming::DeliveryChannel, domain::ContactMessage,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactReceipt {
    pub channel: DeliveryChannel,
}

/// Submit the contact form
///
/// Delivered through the webhook when it is configured, otherwise through
/// the email relay.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message handed to a channel", body = inline(SuccessResponse<ContactReceipt>)),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 502, description = "Channel call failed", body = ErrorResponse),
        (status = 503, description = "No channel configured", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    payload: web::Json<ContactMessage>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .notification_use_case
        .submit_contact(payload.into_inner())
        .await
    {
        Ok(channel) => ApiResponse::success(ContactReceipt { channel }),
        Err(e) => notification_error_response(e),
    }
}
