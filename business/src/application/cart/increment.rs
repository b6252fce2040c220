use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::increment::{
    IncrementCartItemParams, IncrementCartItemUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;

pub struct IncrementCartItemUseCaseImpl {
    pub session: SharedSession,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IncrementCartItemUseCase for IncrementCartItemUseCaseImpl {
    async fn execute(&self, params: IncrementCartItemParams) -> Result<Cart, CartError> {
        let mut session = self.session.lock().await;

        let mut cart = session.cart.clone();
        if !cart.increment(params.product_id) {
            self.logger
                .debug(&format!("Product {} not in cart", params.product_id));
            return Ok(cart);
        }

        self.repository.save(&cart).await?;
        session.cart = cart.clone();
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCartRepo, mock_logger, phone_catalog, session_with_catalog};

    #[tokio::test]
    async fn should_increase_quantity_by_one() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        let session = session_with_catalog();
        session.lock().await.cart.add(phone_catalog()[1].clone());

        let use_case = IncrementCartItemUseCaseImpl {
            session,
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(IncrementCartItemParams { product_id: 7 })
            .await
            .unwrap();

        assert_eq!(cart.find(7).unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn should_ignore_product_not_in_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().never();

        let use_case = IncrementCartItemUseCaseImpl {
            session: session_with_catalog(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(IncrementCartItemParams { product_id: 7 })
            .await
            .unwrap();

        assert!(cart.is_empty());
    }
}
