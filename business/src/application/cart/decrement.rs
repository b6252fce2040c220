use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::decrement::{
    DecrementCartItemParams, DecrementCartItemUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;

pub struct DecrementCartItemUseCaseImpl {
    pub session: SharedSession,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DecrementCartItemUseCase for DecrementCartItemUseCaseImpl {
    async fn execute(&self, params: DecrementCartItemParams) -> Result<Cart, CartError> {
        let mut session = self.session.lock().await;

        let mut cart = session.cart.clone();
        if !cart.decrement(params.product_id) {
            // Absent, or already at quantity 1.
            return Ok(cart);
        }

        self.repository.save(&cart).await?;
        session.cart = cart.clone();
        Ok(cart)
    }
}
