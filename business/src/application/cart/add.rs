use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;

pub struct AddToCartUseCaseImpl {
    pub session: SharedSession,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        let mut session = self.session.lock().await;

        let product = session
            .find_product(params.product_id)
            .cloned()
            .ok_or(CartError::ProductNotFound)?;

        let mut cart = session.cart.clone();
        cart.add(product);
        self.repository.save(&cart).await?;
        session.cart = cart.clone();

        let quantity = cart
            .find(params.product_id)
            .map(|line| line.quantity)
            .unwrap_or_default();
        self.logger.info(&format!(
            "Product {} added to cart, quantity {}",
            params.product_id, quantity
        ));
        Ok(cart)
    }
}
