use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::dismiss_alert::DismissAlertUseCase;

pub struct DismissAlertUseCaseImpl {
    pub session: SharedSession,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DismissAlertUseCase for DismissAlertUseCaseImpl {
    async fn execute(&self) -> Option<String> {
        let dismissed = self.session.lock().await.alert.take();
        if dismissed.is_some() {
            self.logger.debug("Alert dismissed");
        }
        dismissed
    }
}
