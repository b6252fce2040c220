#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("session.product_not_found")]
    ProductNotFound,
    #[error("session.no_product_selected")]
    NoProductSelected,
    #[error("session.unknown_overlay")]
    UnknownOverlay,
}
