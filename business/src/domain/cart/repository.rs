use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Durable storage for the cart. `save` always writes every line.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Cart, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
