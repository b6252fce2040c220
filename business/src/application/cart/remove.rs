use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;

pub struct RemoveFromCartUseCaseImpl {
    pub session: SharedSession,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError> {
        let mut session = self.session.lock().await;

        let mut cart = session.cart.clone();
        if !cart.remove(params.product_id) {
            self.logger.debug(&format!(
                "Product {} not in cart, nothing to remove",
                params.product_id
            ));
            return Ok(cart);
        }

        self.repository.save(&cart).await?;
        session.cart = cart.clone();

        self.logger
            .info(&format!("Product {} removed from cart", params.product_id));
        Ok(cart)
    }
}
