use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::favorite::use_cases::toggle::{ToggleFavoriteParams, ToggleFavoriteUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::favorite::dto::ToggleFavoriteResponse;
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
}

impl FavoriteApi {
    pub fn new(toggle_use_case: Arc<dyn ToggleFavoriteUseCase>) -> Self {
        Self { toggle_use_case }
    }
}

/// Favorites API
#[OpenApi]
impl FavoriteApi {
    /// Toggle a favorite
    ///
    /// Adds the product id to the favorites, or removes it when already there.
    /// The whole set is written to storage before responding.
    #[oai(
        path = "/favorites/:id/toggle",
        method = "post",
        tag = "ApiTags::Favorites"
    )]
    async fn toggle(&self, id: Path<u64>) -> ToggleFavoriteApiResponse {
        match self
            .toggle_use_case
            .execute(ToggleFavoriteParams { product_id: id.0 })
            .await
        {
            Ok(result) => {
                ToggleFavoriteApiResponse::Ok(Json(ToggleFavoriteResponse::new(id.0, result)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ToggleFavoriteApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleFavoriteApiResponse {
    #[oai(status = 200)]
    Ok(Json<ToggleFavoriteResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
