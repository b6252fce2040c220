use async_trait::async_trait;

use crate::domain::catalog::model::ProductId;
use crate::domain::session::detail::DetailView;
use crate::domain::session::errors::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Open(ProductId),
    Back,
    Increment,
    Decrement,
    /// Accepted and ignored; purchasing is not wired to anything.
    Buy,
}

#[async_trait]
pub trait DetailUseCase: Send + Sync {
    /// Returns the detail page after the action, `None` once back on the list.
    async fn execute(&self, action: DetailAction) -> Result<Option<DetailView>, SessionError>;
}
