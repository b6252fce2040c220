use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::session::errors::SessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SessionError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "session.product_not_found",
            ),
            SessionError::NoProductSelected => (
                StatusCode::CONFLICT,
                "Conflict",
                "session.no_product_selected",
            ),
            SessionError::UnknownOverlay => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "session.unknown_overlay",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
