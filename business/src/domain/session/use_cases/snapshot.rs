use async_trait::async_trait;

use crate::domain::session::model::SessionSnapshot;

#[async_trait]
pub trait GetSessionSnapshotUseCase: Send + Sync {
    async fn execute(&self) -> SessionSnapshot;
}
