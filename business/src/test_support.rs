use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::services::CatalogSearchService;
use crate::domain::errors::RepositoryError;
use crate::domain::favorite::model::FavoriteSet;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::logger::Logger;
use crate::domain::session::model::{SessionState, SharedSession};

mock! {
    pub CatalogSearch {}

    #[async_trait]
    impl CatalogSearchService for CatalogSearch {
        async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError>;
    }
}

mock! {
    pub FavoriteRepo {}

    #[async_trait]
    impl FavoriteRepository for FavoriteRepo {
        async fn load(&self) -> Result<FavoriteSet, RepositoryError>;
        async fn save(&self, favorites: &FavoriteSet) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn load(&self) -> Result<Cart, RepositoryError>;
        async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn phone_catalog() -> Vec<Product> {
    vec![
        Product::new(5, "iPhone X", "SIM-Free, Model A19211", 899.0, "https://cdn.example/5.jpg"),
        Product::new(7, "iPhone 9", "An apple mobile", 549.0, "https://cdn.example/7.jpg"),
        Product::new(9, "Samsung Universe 9", "Samsung's new variant", 1249.0, "https://cdn.example/9.jpg"),
    ]
}

/// A session that already shows the phone catalog.
pub fn session_with_catalog() -> SharedSession {
    let mut state = SessionState::new();
    let ticket = state.begin_search("phone".to_string());
    state.settle_search(ticket, Ok(phone_catalog()));
    state.into_shared()
}
