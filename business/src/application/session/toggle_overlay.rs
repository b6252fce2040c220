use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::toggle_overlay::{
    ToggleOverlayParams, ToggleOverlayUseCase,
};

pub struct ToggleOverlayUseCaseImpl {
    pub session: SharedSession,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleOverlayUseCase for ToggleOverlayUseCaseImpl {
    async fn execute(&self, params: ToggleOverlayParams) -> bool {
        let shown = self.session.lock().await.toggle_overlay(params.overlay);
        self.logger
            .debug(&format!("Overlay {} shown: {}", params.overlay, shown));
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::model::{Overlay, SessionState};
    use crate::test_support::mock_logger;

    #[tokio::test]
    async fn should_flip_requested_overlay_only() {
        let session = SessionState::new().into_shared();
        let use_case = ToggleOverlayUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        assert!(
            use_case
                .execute(ToggleOverlayParams {
                    overlay: Overlay::Cart
                })
                .await
        );
        assert!(
            !use_case
                .execute(ToggleOverlayParams {
                    overlay: Overlay::Cart
                })
                .await
        );

        let state = session.lock().await;
        assert!(!state.show_cart);
        assert!(!state.show_menu);
    }
}
