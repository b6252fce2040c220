use async_trait::async_trait;

#[async_trait]
pub trait DismissAlertUseCase: Send + Sync {
    /// Returns the alert that was showing, if any.
    async fn execute(&self) -> Option<String>;
}
