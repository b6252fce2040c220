use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::model::{SessionSnapshot, SharedSession};
use crate::domain::session::use_cases::snapshot::GetSessionSnapshotUseCase;

pub struct GetSessionSnapshotUseCaseImpl {
    pub session: SharedSession,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSessionSnapshotUseCase for GetSessionSnapshotUseCaseImpl {
    async fn execute(&self) -> SessionSnapshot {
        let snapshot = self.session.lock().await.snapshot();
        self.logger.debug(&format!(
            "Session snapshot: {} products shown, {} cart lines",
            snapshot.products.len(),
            snapshot.cart_count
        ));
        snapshot
    }
}
