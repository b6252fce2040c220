use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::get::GetCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;

pub struct GetCartUseCaseImpl {
    pub session: SharedSession,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Cart {
        let cart = self.session.lock().await.cart.clone();
        self.logger
            .debug(&format!("Cart has {} lines", cart.item_count()));
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mock_logger, phone_catalog, session_with_catalog};

    #[tokio::test]
    async fn should_return_current_cart() {
        let session = session_with_catalog();
        session.lock().await.cart.add(phone_catalog()[2].clone());

        let use_case = GetCartUseCaseImpl {
            session,
            logger: mock_logger(),
        };

        let cart = use_case.execute().await;

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), 1249.0);
    }
}
