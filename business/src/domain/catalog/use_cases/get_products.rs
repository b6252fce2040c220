use async_trait::async_trait;

use crate::domain::catalog::model::Product;

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Product>;
}
