use async_trait::async_trait;

use crate::domain::session::model::Overlay;

pub struct ToggleOverlayParams {
    pub overlay: Overlay,
}

#[async_trait]
pub trait ToggleOverlayUseCase: Send + Sync {
    /// Returns the new value of the overlay flag.
    async fn execute(&self, params: ToggleOverlayParams) -> bool;
}
