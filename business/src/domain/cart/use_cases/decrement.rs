use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::catalog::model::ProductId;

pub struct DecrementCartItemParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait DecrementCartItemUseCase: Send + Sync {
    async fn execute(&self, params: DecrementCartItemParams) -> Result<Cart, CartError>;
}
