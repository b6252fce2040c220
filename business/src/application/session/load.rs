use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::load::{LoadSessionUseCase, LoadedSession};

pub struct LoadSessionUseCaseImpl {
    pub session: SharedSession,
    pub favorite_repository: Arc<dyn FavoriteRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadSessionUseCase for LoadSessionUseCaseImpl {
    async fn execute(&self) -> LoadedSession {
        let favorites = self
            .favorite_repository
            .load()
            .await
            .unwrap_or_else(|err| {
                self.logger
                    .warn(&format!("Could not read favorites, starting empty: {}", err));
                Default::default()
            });
        let cart = self.cart_repository.load().await.unwrap_or_else(|err| {
            self.logger
                .warn(&format!("Could not read cart, starting empty: {}", err));
            Default::default()
        });

        let loaded = LoadedSession {
            favorites: favorites.len(),
            cart_lines: cart.item_count(),
        };
        self.session.lock().await.restore(favorites, cart);

        self.logger.info(&format!(
            "Session restored: {} favorites, {} cart lines",
            loaded.favorites, loaded.cart_lines
        ));
        loaded
    }
}
