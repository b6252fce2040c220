use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::FetchFailed => (
                StatusCode::BAD_GATEWAY,
                "CatalogUnavailable",
                "catalog.fetch_failed",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
