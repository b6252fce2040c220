use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::use_cases::get_products::GetProductsUseCase;
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;

pub struct GetProductsUseCaseImpl {
    pub session: SharedSession,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(&self) -> Vec<Product> {
        let products = self.session.lock().await.displayed_products();
        self.logger
            .debug(&format!("Displaying {} products", products.len()));
        products
    }
}
