use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::decrement::{
    DecrementCartItemParams, DecrementCartItemUseCase,
};
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::increment::{
    IncrementCartItemParams, IncrementCartItemUseCase,
};
use business::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};

use crate::api::cart::dto::{AddToCartRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    increment_use_case: Arc<dyn IncrementCartItemUseCase>,
    decrement_use_case: Arc<dyn DecrementCartItemUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        increment_use_case: Arc<dyn IncrementCartItemUseCase>,
        decrement_use_case: Arc<dyn DecrementCartItemUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            remove_use_case,
            increment_use_case,
            decrement_use_case,
        }
    }
}

fn into_response(result: Result<Cart, CartError>) -> CartApiResponse {
    match result {
        Ok(cart) => CartApiResponse::Ok(Json(cart.into())),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                404 => CartApiResponse::NotFound(json),
                _ => CartApiResponse::InternalError(json),
            }
        }
    }
}

/// Shopping cart API
///
/// Every change is written to storage before the response is sent.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the lines with the badge count and the grand total.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> Json<CartResponse> {
        Json(self.get_use_case.execute().await.into())
    }

    /// Add a product
    ///
    /// Creates a line with quantity 1, or adds 1 to the existing line.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add(&self, body: Json<AddToCartRequest>) -> CartApiResponse {
        into_response(
            self.add_use_case
                .execute(AddToCartParams {
                    product_id: body.0.product_id,
                })
                .await,
        )
    }

    /// Remove a line
    ///
    /// Removing a product that is not in the cart changes nothing.
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove(&self, id: Path<u64>) -> CartApiResponse {
        into_response(
            self.remove_use_case
                .execute(RemoveFromCartParams { product_id: id.0 })
                .await,
        )
    }

    /// Increase a line quantity by one
    #[oai(
        path = "/cart/items/:id/increment",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn increment(&self, id: Path<u64>) -> CartApiResponse {
        into_response(
            self.increment_use_case
                .execute(IncrementCartItemParams { product_id: id.0 })
                .await,
        )
    }

    /// Decrease a line quantity by one
    ///
    /// A line already at quantity 1 is left as is.
    #[oai(
        path = "/cart/items/:id/decrement",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn decrement(&self, id: Path<u64>) -> CartApiResponse {
        into_response(
            self.decrement_use_case
                .execute(DecrementCartItemParams { product_id: id.0 })
                .await,
        )
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
