#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
