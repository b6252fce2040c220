use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::toggle::{
    ToggleFavoriteParams, ToggleFavoriteResult, ToggleFavoriteUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;

pub struct ToggleFavoriteUseCaseImpl {
    pub session: SharedSession,
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    async fn execute(
        &self,
        params: ToggleFavoriteParams,
    ) -> Result<ToggleFavoriteResult, FavoriteError> {
        let mut session = self.session.lock().await;

        // Committed in memory only once storage holds the new set.
        let mut favorites = session.favorites.clone();
        let is_favorite = favorites.toggle(params.product_id);
        self.repository.save(&favorites).await?;
        session.favorites = favorites.clone();

        self.logger.info(&format!(
            "Product {} {} favorites",
            params.product_id,
            if is_favorite { "added to" } else { "removed from" }
        ));
        Ok(ToggleFavoriteResult {
            is_favorite,
            favorites,
        })
    }
}
