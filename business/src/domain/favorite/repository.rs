use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::FavoriteSet;

/// Durable storage for the favorite set. `save` always writes the whole set.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn load(&self) -> Result<FavoriteSet, RepositoryError>;
    async fn save(&self, favorites: &FavoriteSet) -> Result<(), RepositoryError>;
}
