use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::catalog::model::ProductId;

pub struct IncrementCartItemParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait IncrementCartItemUseCase: Send + Sync {
    async fn execute(&self, params: IncrementCartItemParams) -> Result<Cart, CartError>;
}
