use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::{Cart, CartLine};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::keys;
use crate::storage::KeyValueStorage;

/// Cart stored as a JSON array of flat cart lines under the `cartItems` entry.
pub struct CartRepositoryLocal {
    storage: Arc<dyn KeyValueStorage>,
}

impl CartRepositoryLocal {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryLocal {
    async fn load(&self) -> Result<Cart, RepositoryError> {
        let raw = self
            .storage
            .get_item(keys::CART_ITEMS)
            .await
            .map_err(|_| RepositoryError::Persistence)?;

        let Some(raw) = raw else {
            return Ok(Cart::new());
        };

        match serde_json::from_str::<Option<Vec<CartLine>>>(&raw) {
            Ok(lines) => Ok(Cart::from_repository(lines.unwrap_or_default())),
            Err(err) => {
                tracing::warn!(error = %err, "Malformed cart entry, treating as empty");
                Ok(Cart::new())
            }
        }
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(cart).map_err(|_| RepositoryError::Serialization)?;

        self.storage
            .set_item(keys::CART_ITEMS, &raw)
            .await
            .map_err(|_| RepositoryError::Persistence)
    }
}
