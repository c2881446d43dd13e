pub mod routes;

use actix_web::{http::StatusCode, HttpResponse};
use tracing::error;

use crate::notification::domain::NotificationError;
use crate::shared::api::ApiResponse;

pub fn notification_error_response(e: NotificationError) -> HttpResponse {
    let message = e.to_string();

    match e {
        NotificationError::MissingRequiredFields(_) => {
            ApiResponse::bad_request("MISSING_REQUIRED_FIELDS", &message)
        }
        NotificationError::InvalidEmail(_) => ApiResponse::bad_request("INVALID_EMAIL", &message),
        NotificationError::DeliveryFailed(_) => {
            ApiResponse::bad_gateway("DELIVERY_FAILED", &message)
        }
        NotificationError::NoChannelConfigured => ApiResponse::error(
            StatusCode::SERVICE_UNAVAILABLE,
            "NO_CHANNEL_CONFIGURED",
            &message,
        ),
        NotificationError::Storage(e) => {
            error!("Notification settings storage failure: {}", e);
            ApiResponse::internal_error()
        }
    }
}
