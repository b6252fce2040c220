use async_trait::async_trait;

use crate::domain::catalog::model::ProductId;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteSet;

pub struct ToggleFavoriteParams {
    pub product_id: ProductId,
}

#[derive(Debug, Clone)]
pub struct ToggleFavoriteResult {
    pub is_favorite: bool,
    pub favorites: FavoriteSet,
}

#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ToggleFavoriteParams,
    ) -> Result<ToggleFavoriteResult, FavoriteError>;
}
