use std::sync::Arc;

use async_trait::async_trait;

use business::domain::catalog::model::ProductId;
use business::domain::errors::RepositoryError;
use business::domain::favorite::model::FavoriteSet;
use business::domain::favorite::repository::FavoriteRepository;

use crate::keys;
use crate::storage::KeyValueStorage;

/// Favorites stored as a JSON array of ids under the `favorites` entry.
pub struct FavoriteRepositoryLocal {
    storage: Arc<dyn KeyValueStorage>,
}

impl FavoriteRepositoryLocal {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryLocal {
    async fn load(&self) -> Result<FavoriteSet, RepositoryError> {
        let raw = self
            .storage
            .get_item(keys::FAVORITES)
            .await
            .map_err(|_| RepositoryError::Persistence)?;

        let Some(raw) = raw else {
            return Ok(FavoriteSet::new());
        };

        match serde_json::from_str::<Option<Vec<ProductId>>>(&raw) {
            Ok(ids) => Ok(FavoriteSet::from_repository(ids.unwrap_or_default())),
            Err(err) => {
                tracing::warn!(error = %err, "Malformed favorites entry, treating as empty");
                Ok(FavoriteSet::new())
            }
        }
    }

    async fn save(&self, favorites: &FavoriteSet) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(favorites).map_err(|_| RepositoryError::Serialization)?;

        self.storage
            .set_item(keys::FAVORITES, &raw)
            .await
            .map_err(|_| RepositoryError::Persistence)
    }
}
